use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        State,
        rejection::{BytesRejection, JsonRejection},
    },
    http::HeaderMap,
    routing::{get, post},
};
use recruit_core::{
    domain::{
        repositories::compliance::ComplianceRepository,
        value_objects::compliance::{
            ClientContext, ConsentRecordDto, DeletionRequestDto, DeletionRequestModel,
            RecordConsentModel,
        },
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::compliance::CompliancePostgres,
    },
};
use serde::Serialize;

use crate::{
    auth::AuthUser,
    axum_http::{
        client_info::extract_client_info,
        error_responses::{AppError, optional_json_body},
    },
    usecases::privacy::PrivacyUseCase,
};

#[derive(Debug, Serialize)]
pub struct ConsentsResponse {
    pub consents: Vec<ConsentRecordDto>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let compliance_repository = CompliancePostgres::new(Arc::clone(&db_pool));
    let privacy_usecase = PrivacyUseCase::new(Arc::new(compliance_repository));

    router(privacy_usecase)
}

pub fn router<C>(privacy_usecase: PrivacyUseCase<C>) -> Router
where
    C: ComplianceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/consent", post(record_consent))
        .route("/consents", get(list_consents))
        .route("/deletion-request", post(request_deletion))
        .with_state(Arc::new(privacy_usecase))
}

pub async fn record_consent<C>(
    State(privacy_usecase): State<Arc<PrivacyUseCase<C>>>,
    auth: AuthUser,
    headers: HeaderMap,
    payload: Result<Json<RecordConsentModel>, JsonRejection>,
) -> Result<Json<ConsentRecordDto>, AppError>
where
    C: ComplianceRepository + Send + Sync + 'static,
{
    let Json(model) = payload?;
    let client = ClientContext::from(extract_client_info(&headers));
    let record = privacy_usecase
        .record_consent(auth.user_id, model, client)
        .await?;

    Ok(Json(record))
}

pub async fn list_consents<C>(
    State(privacy_usecase): State<Arc<PrivacyUseCase<C>>>,
    auth: AuthUser,
) -> Result<Json<ConsentsResponse>, AppError>
where
    C: ComplianceRepository + Send + Sync + 'static,
{
    let consents = privacy_usecase.list_consents(auth.user_id).await?;

    Ok(Json(ConsentsResponse { consents }))
}

pub async fn request_deletion<C>(
    State(privacy_usecase): State<Arc<PrivacyUseCase<C>>>,
    auth: AuthUser,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DeletionRequestDto>, AppError>
where
    C: ComplianceRepository + Send + Sync + 'static,
{
    let model: DeletionRequestModel = optional_json_body(&body?)?;
    let client = ClientContext::from(extract_client_info(&headers));
    let request = privacy_usecase
        .request_deletion(auth.user_id, model, client)
        .await?;

    Ok(Json(request))
}
