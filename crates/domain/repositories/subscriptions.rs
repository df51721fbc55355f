use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::subscriptions::SubscriptionEntity;

#[automock]
#[async_trait]
pub trait SubscriptionRepository {
    /// Active subscriptions whose current period ended before `now`.
    async fn find_expired_active(&self, now: DateTime<Utc>) -> Result<Vec<SubscriptionEntity>>;

    async fn mark_expired(&self, subscription_id: Uuid) -> Result<()>;

    /// Whether the user still holds an active subscription running past `now`.
    async fn has_active_subscription(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<bool>;
}
