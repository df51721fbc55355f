use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::notification_preferences::NotificationPreferenceEntity;

#[automock]
#[async_trait]
pub trait NotificationPreferenceRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<NotificationPreferenceEntity>>;

    async fn upsert(
        &self,
        preference: NotificationPreferenceEntity,
    ) -> Result<NotificationPreferenceEntity>;
}
