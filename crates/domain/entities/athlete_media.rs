use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::athlete_media;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = athlete_media)]
pub struct AthleteMediaEntity {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub media_type: String,
    pub url: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}
