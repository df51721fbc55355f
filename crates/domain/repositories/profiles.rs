use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::profiles::ProfileEntity,
    value_objects::enums::subscription_tiers::SubscriptionTier,
};

#[automock]
#[async_trait]
pub trait ProfileRepository {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<ProfileEntity>>;

    async fn find_public_by_username(&self, username: String) -> Result<Option<ProfileEntity>>;

    async fn update_subscription_tier(&self, user_id: Uuid, tier: SubscriptionTier) -> Result<()>;
}
