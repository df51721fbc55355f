use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use recruit_core::{
    domain::{
        repositories::notification_preferences::NotificationPreferenceRepository,
        value_objects::{
            notification_preferences::{NotificationPreferenceDto, UpdateNotificationPreferenceModel},
            notification_types::{NOTIFICATION_TYPES, NotificationType},
        },
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::notification_preferences::NotificationPreferencePostgres,
    },
};
use serde::Serialize;

use crate::{
    auth::AuthUser,
    axum_http::error_responses::AppError,
    usecases::notification_preferences::NotificationPreferenceUseCase,
};

#[derive(Debug, Serialize)]
pub struct NotificationTypesResponse {
    pub types: &'static [NotificationType],
}

#[derive(Debug, Serialize)]
pub struct NotificationPreferencesResponse {
    pub preferences: Vec<NotificationPreferenceDto>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let preference_repository = NotificationPreferencePostgres::new(Arc::clone(&db_pool));
    let preference_usecase = NotificationPreferenceUseCase::new(Arc::new(preference_repository));

    router(preference_usecase)
}

pub fn router<N>(preference_usecase: NotificationPreferenceUseCase<N>) -> Router
where
    N: NotificationPreferenceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/types", get(list_types))
        .route(
            "/preferences",
            get(list_preferences::<N>).put(update_preference::<N>),
        )
        .with_state(Arc::new(preference_usecase))
}

pub async fn list_types() -> Json<NotificationTypesResponse> {
    Json(NotificationTypesResponse {
        types: NOTIFICATION_TYPES,
    })
}

pub async fn list_preferences<N>(
    State(preference_usecase): State<Arc<NotificationPreferenceUseCase<N>>>,
    auth: AuthUser,
) -> Result<Json<NotificationPreferencesResponse>, AppError>
where
    N: NotificationPreferenceRepository + Send + Sync + 'static,
{
    let preferences = preference_usecase.list(auth.user_id).await?;

    Ok(Json(NotificationPreferencesResponse { preferences }))
}

pub async fn update_preference<N>(
    State(preference_usecase): State<Arc<NotificationPreferenceUseCase<N>>>,
    auth: AuthUser,
    payload: Result<Json<UpdateNotificationPreferenceModel>, JsonRejection>,
) -> Result<Json<NotificationPreferenceDto>, AppError>
where
    N: NotificationPreferenceRepository + Send + Sync + 'static,
{
    let Json(model) = payload?;
    let preference = preference_usecase.update(auth.user_id, model).await?;

    Ok(Json(preference))
}
