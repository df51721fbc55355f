use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::athlete_media::AthleteMediaEntity,
        repositories::media::MediaRepository,
        value_objects::{enums::media_types::MediaType, media::MediaUsage},
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::athlete_media},
};

pub struct MediaPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl MediaPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl MediaRepository for MediaPostgres {
    async fn count_usage(&self, athlete_id: Uuid) -> Result<MediaUsage> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = athlete_media::table
            .filter(athlete_media::athlete_id.eq(athlete_id))
            .group_by(athlete_media::media_type)
            .select((athlete_media::media_type, diesel::dsl::count_star()))
            .load::<(String, i64)>(&mut conn)?;

        let mut usage = MediaUsage::default();
        for (media_type, count) in rows {
            let count = u32::try_from(count).unwrap_or(u32::MAX);
            match media_type.parse::<MediaType>() {
                Ok(MediaType::Video) => usage.videos = count,
                Ok(MediaType::Photo) => usage.photos = count,
                Err(_) => {}
            }
        }

        Ok(usage)
    }

    async fn list_by_athlete(
        &self,
        athlete_id: Uuid,
        media_type: MediaType,
    ) -> Result<Vec<AthleteMediaEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = athlete_media::table
            .filter(athlete_media::athlete_id.eq(athlete_id))
            .filter(athlete_media::media_type.eq(media_type.to_string()))
            .order(athlete_media::created_at.desc())
            .select(AthleteMediaEntity::as_select())
            .load::<AthleteMediaEntity>(&mut conn)?;

        Ok(results)
    }
}
