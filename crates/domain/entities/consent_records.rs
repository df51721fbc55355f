use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::consent_records;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = consent_records)]
pub struct ConsentRecordEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub consent_type: String,
    pub granted: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = consent_records)]
pub struct InsertConsentRecordEntity {
    pub user_id: Uuid,
    pub consent_type: String,
    pub granted: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}
