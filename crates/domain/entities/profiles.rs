use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::enums::subscription_tiers::SubscriptionTier,
    infra::db::postgres::schema::profiles,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = profiles)]
pub struct ProfileEntity {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub sport: Option<String>,
    pub position: Option<String>,
    pub graduation_year: Option<i32>,
    pub school: Option<String>,
    pub bio: Option<String>,
    pub is_public: bool,
    pub subscription_tier: String,
    pub stripe_customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileEntity {
    pub fn tier(&self) -> SubscriptionTier {
        SubscriptionTier::from_stored(&self.subscription_tier)
    }
}
