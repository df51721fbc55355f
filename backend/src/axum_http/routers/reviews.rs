use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use recruit_core::{
    domain::repositories::reviews::ReviewVerificationRepository,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::reviews::ReviewVerificationPostgres,
    },
};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    axum_http::error_responses::AppError,
    usecases::reviews::{ReviewUseCase, VerifiedReviewsDto},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedReviewsQuery {
    pub athlete_id: Option<String>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let review_repository = ReviewVerificationPostgres::new(Arc::clone(&db_pool));
    let review_usecase = ReviewUseCase::new(Arc::new(review_repository));

    router(review_usecase)
}

pub fn router<R>(review_usecase: ReviewUseCase<R>) -> Router
where
    R: ReviewVerificationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/verified", get(verified_reviews))
        .with_state(Arc::new(review_usecase))
}

pub async fn verified_reviews<R>(
    State(review_usecase): State<Arc<ReviewUseCase<R>>>,
    query: Result<Query<VerifiedReviewsQuery>, QueryRejection>,
) -> Result<Json<VerifiedReviewsDto>, AppError>
where
    R: ReviewVerificationRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let athlete_id = query
        .athlete_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Athlete ID is required".to_string()))?;
    let athlete_id = Uuid::parse_str(athlete_id)
        .map_err(|_| AppError::BadRequest("Invalid athlete ID".to_string()))?;

    let reviews = review_usecase
        .get_verified_reviews(athlete_id)
        .await
        .map_err(|err| {
            error!(%athlete_id, error = ?err, "reviews: request failed");
            AppError::Internal("Failed to fetch verified reviews".to_string())
        })?;

    Ok(Json(reviews))
}
