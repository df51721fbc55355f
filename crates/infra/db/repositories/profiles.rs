use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, pg::Pg, prelude::*, sql_types::Text, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::profiles::ProfileEntity, repositories::profiles::ProfileRepository,
        value_objects::enums::subscription_tiers::SubscriptionTier,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::profiles},
};

diesel::define_sql_function!(fn lower(x: Text) -> Text);

/// Public profile lookup matching the stored username regardless of case.
fn public_by_username(username: String) -> profiles::BoxedQuery<'static, Pg> {
    profiles::table
        .filter(lower(profiles::username).eq(username.to_lowercase()))
        .filter(profiles::is_public.eq(true))
        .into_boxed()
}

pub struct ProfilePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ProfilePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProfileRepository for ProfilePostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<ProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let profile = profiles::table
            .find(user_id)
            .select(ProfileEntity::as_select())
            .first::<ProfileEntity>(&mut conn)
            .optional()?;

        Ok(profile)
    }

    async fn find_public_by_username(&self, username: String) -> Result<Option<ProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let profile = public_by_username(username)
            .select(ProfileEntity::as_select())
            .first::<ProfileEntity>(&mut conn)
            .optional()?;

        Ok(profile)
    }

    async fn update_subscription_tier(&self, user_id: Uuid, tier: SubscriptionTier) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(profiles::table)
            .filter(profiles::id.eq(user_id))
            .set((
                profiles::subscription_tier.eq(tier.to_string()),
                profiles::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
