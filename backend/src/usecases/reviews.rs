use std::sync::Arc;

use anyhow::Result;
use recruit_core::domain::{
    repositories::reviews::ReviewVerificationRepository,
    value_objects::reviews::{VerificationStats, VerifiedReviewDto},
};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Serialize, PartialEq)]
pub struct VerifiedReviewsDto {
    pub reviews: Vec<VerifiedReviewDto>,
    pub stats: VerificationStats,
}

pub struct ReviewUseCase<R>
where
    R: ReviewVerificationRepository + Send + Sync + 'static,
{
    review_repository: Arc<R>,
}

impl<R> ReviewUseCase<R>
where
    R: ReviewVerificationRepository + Send + Sync + 'static,
{
    pub fn new(review_repository: Arc<R>) -> Self {
        Self { review_repository }
    }

    pub async fn get_verified_reviews(&self, athlete_id: Uuid) -> Result<VerifiedReviewsDto> {
        let reviews = self
            .review_repository
            .find_verified_reviews(athlete_id)
            .await
            .map_err(|err| {
                error!(%athlete_id, db_error = ?err, "reviews: failed to load verified reviews");
                err
            })?;

        let stats = self
            .review_repository
            .get_verification_stats(athlete_id)
            .await
            .map_err(|err| {
                error!(%athlete_id, db_error = ?err, "reviews: failed to load verification stats");
                err
            })?;

        info!(
            %athlete_id,
            verified = reviews.len(),
            total = stats.total_reviews,
            "reviews: verified reviews loaded"
        );

        Ok(VerifiedReviewsDto {
            reviews: reviews.into_iter().map(VerifiedReviewDto::from).collect(),
            stats,
        })
    }
}
