use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::notification_preferences;

#[derive(Debug, Clone, PartialEq, Selectable, Queryable, Insertable)]
#[diesel(table_name = notification_preferences)]
pub struct NotificationPreferenceEntity {
    pub user_id: Uuid,
    pub notification_type: String,
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub updated_at: DateTime<Utc>,
}
