use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::reviews::ReviewEntity, value_objects::reviews::VerificationStats,
};

#[automock]
#[async_trait]
pub trait ReviewVerificationRepository {
    async fn find_verified_reviews(&self, athlete_id: Uuid) -> Result<Vec<ReviewEntity>>;

    async fn get_verification_stats(&self, athlete_id: Uuid) -> Result<VerificationStats>;
}
