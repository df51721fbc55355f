use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::reviews::ReviewEntity,
        repositories::reviews::ReviewVerificationRepository,
        value_objects::{
            enums::verification_statuses::VerificationStatus, reviews::VerificationStats,
        },
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::reviews},
};

pub struct ReviewVerificationPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ReviewVerificationPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ReviewVerificationRepository for ReviewVerificationPostgres {
    async fn find_verified_reviews(&self, athlete_id: Uuid) -> Result<Vec<ReviewEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = reviews::table
            .filter(reviews::athlete_id.eq(athlete_id))
            .filter(reviews::verification_status.eq(VerificationStatus::Verified.to_string()))
            .order((reviews::verified_at.desc(), reviews::created_at.desc()))
            .select(ReviewEntity::as_select())
            .load::<ReviewEntity>(&mut conn)?;

        Ok(results)
    }

    async fn get_verification_stats(&self, athlete_id: Uuid) -> Result<VerificationStats> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = reviews::table
            .filter(reviews::athlete_id.eq(athlete_id))
            .select((reviews::rating, reviews::verification_status))
            .load::<(i32, String)>(&mut conn)?;

        Ok(VerificationStats::from_rows(
            rows.iter().map(|(rating, status)| (*rating, status.as_str())),
        ))
    }
}
