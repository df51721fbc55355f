use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    consent_records::ConsentRecordEntity, deletion_requests::DeletionRequestEntity,
};

pub const AUDIT_CONSENT_RECORDED: &str = "consent.recorded";
pub const AUDIT_DELETION_REQUESTED: &str = "deletion.requested";

/// Consent kinds a user can grant or withdraw.
pub const CONSENT_TYPES: &[&str] = &[
    "terms_of_service",
    "privacy_policy",
    "marketing_emails",
    "profile_visibility",
    "data_sharing_with_coaches",
];

pub fn is_known_consent_type(value: &str) -> bool {
    CONSENT_TYPES.contains(&value)
}

/// Caller metadata recorded alongside compliance events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientContext {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordConsentModel {
    pub consent_type: Option<String>,
    pub granted: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DeletionRequestModel {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecordDto {
    pub id: Uuid,
    pub consent_type: String,
    pub granted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ConsentRecordEntity> for ConsentRecordDto {
    fn from(value: ConsentRecordEntity) -> Self {
        Self {
            id: value.id,
            consent_type: value.consent_type,
            granted: value.granted,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRequestDto {
    pub id: Uuid,
    pub reason: Option<String>,
    pub status: String,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl From<DeletionRequestEntity> for DeletionRequestDto {
    fn from(value: DeletionRequestEntity) -> Self {
        Self {
            id: value.id,
            reason: value.reason,
            status: value.status,
            requested_at: value.requested_at,
            processed_at: value.processed_at,
        }
    }
}
