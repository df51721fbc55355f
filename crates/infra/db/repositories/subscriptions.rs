use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{RunQueryDsl, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::subscriptions::SubscriptionEntity,
        repositories::subscriptions::SubscriptionRepository,
        value_objects::enums::subscription_statuses::SubscriptionStatus,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::subscriptions},
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn find_expired_active(&self, now: DateTime<Utc>) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = subscriptions::table
            .filter(subscriptions::status.eq(SubscriptionStatus::Active.to_string()))
            .filter(subscriptions::current_period_end.lt(now))
            .order(subscriptions::current_period_end.asc())
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn mark_expired(&self, subscription_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(subscriptions::table)
            .filter(subscriptions::id.eq(subscription_id))
            .set((
                subscriptions::status.eq(SubscriptionStatus::Expired.to_string()),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn has_active_subscription(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let remaining = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .filter(subscriptions::status.eq(SubscriptionStatus::Active.to_string()))
            .filter(subscriptions::current_period_end.ge(now))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(remaining > 0)
    }
}
