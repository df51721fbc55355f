use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::subscriptions;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscriptions)]
pub struct SubscriptionEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tier: String,
    pub status: String,
    pub stripe_subscription_id: Option<String>,
    pub current_period_end: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
