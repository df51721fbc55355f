use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::athlete_media::AthleteMediaEntity,
    value_objects::{enums::media_types::MediaType, media::MediaUsage},
};

#[automock]
#[async_trait]
pub trait MediaRepository {
    async fn count_usage(&self, athlete_id: Uuid) -> Result<MediaUsage>;

    async fn list_by_athlete(
        &self,
        athlete_id: Uuid,
        media_type: MediaType,
    ) -> Result<Vec<AthleteMediaEntity>>;
}
