use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::deletion_requests;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = deletion_requests)]
pub struct DeletionRequestEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reason: Option<String>,
    pub status: String,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = deletion_requests)]
pub struct InsertDeletionRequestEntity {
    pub user_id: Uuid,
    pub reason: Option<String>,
    pub status: String,
    pub requested_at: DateTime<Utc>,
}
