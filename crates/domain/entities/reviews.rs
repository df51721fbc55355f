use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::reviews;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = reviews)]
pub struct ReviewEntity {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub reviewer_name: String,
    pub reviewer_title: Option<String>,
    pub reviewer_organization: Option<String>,
    pub rating: i32,
    pub content: String,
    pub verification_status: String,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
