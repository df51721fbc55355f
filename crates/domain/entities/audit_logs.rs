use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::audit_logs;

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = audit_logs)]
pub struct InsertAuditLogEntity {
    pub user_id: Option<Uuid>,
    pub action: String,
    pub details: serde_json::Value,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}
