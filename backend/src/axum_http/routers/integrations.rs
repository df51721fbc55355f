use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use recruit_core::{
    domain::repositories::integration_tokens::IntegrationTokenRepository,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::integration_tokens::IntegrationTokenPostgres,
    },
};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    axum_http::error_responses::AppError,
    usecases::integrations::{DisconnectResult, IntegrationUseCase},
};

#[derive(Debug, Deserialize)]
pub struct DisconnectModel {
    pub provider: Option<String>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let integration_token_repository = IntegrationTokenPostgres::new(Arc::clone(&db_pool));
    let integration_usecase = IntegrationUseCase::new(Arc::new(integration_token_repository));

    router(integration_usecase)
}

pub fn router<T>(integration_usecase: IntegrationUseCase<T>) -> Router
where
    T: IntegrationTokenRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/disconnect", post(disconnect))
        .with_state(Arc::new(integration_usecase))
}

pub async fn disconnect<T>(
    State(integration_usecase): State<Arc<IntegrationUseCase<T>>>,
    auth: AuthUser,
    payload: Result<Json<DisconnectModel>, JsonRejection>,
) -> Result<Json<DisconnectResult>, AppError>
where
    T: IntegrationTokenRepository + Send + Sync + 'static,
{
    let Json(model) = payload?;
    let result = integration_usecase
        .disconnect(auth.user_id, model.provider)
        .await?;

    Ok(Json(result))
}
