use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::notification_preferences::NotificationPreferenceEntity,
    value_objects::notification_types::{NotificationCategory, NotificationType},
};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferenceDto {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub name: &'static str,
    pub category: NotificationCategory,
    pub email: bool,
    pub push: bool,
}

impl NotificationPreferenceDto {
    /// Catalog defaults, overridden by the user's stored choice when present.
    pub fn merge(
        notification_type: &'static NotificationType,
        stored: Option<&NotificationPreferenceEntity>,
    ) -> Self {
        Self {
            type_: notification_type.id,
            name: notification_type.name,
            category: notification_type.category,
            email: stored.map_or(notification_type.default_email, |s| s.email_enabled),
            push: stored.map_or(notification_type.default_push, |s| s.push_enabled),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNotificationPreferenceModel {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub email: Option<bool>,
    pub push: Option<bool>,
}
