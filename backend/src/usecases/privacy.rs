use std::sync::Arc;

use chrono::Utc;
use recruit_core::domain::{
    entities::{
        audit_logs::InsertAuditLogEntity, consent_records::InsertConsentRecordEntity,
        deletion_requests::InsertDeletionRequestEntity,
    },
    repositories::compliance::ComplianceRepository,
    value_objects::{
        compliance::{
            AUDIT_CONSENT_RECORDED, AUDIT_DELETION_REQUESTED, ClientContext, ConsentRecordDto,
            DeletionRequestDto, DeletionRequestModel, RecordConsentModel, is_known_consent_type,
        },
        enums::deletion_request_statuses::DeletionRequestStatus,
    },
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

const MAX_REASON_LEN: usize = 1000;

#[derive(Debug, Error)]
pub enum PrivacyError {
    #[error("Consent type is required")]
    MissingConsentType,
    #[error("Unknown consent type: {0}")]
    UnknownConsentType(String),
    #[error("Granted flag is required")]
    MissingGranted,
    #[error("Reason is too long")]
    ReasonTooLong,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<PrivacyError> for AppError {
    fn from(value: PrivacyError) -> Self {
        match value {
            PrivacyError::Internal(_) => {
                AppError::Internal("Failed to process privacy request".to_string())
            }
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

pub struct PrivacyUseCase<C>
where
    C: ComplianceRepository + Send + Sync + 'static,
{
    compliance_repository: Arc<C>,
}

impl<C> PrivacyUseCase<C>
where
    C: ComplianceRepository + Send + Sync + 'static,
{
    pub fn new(compliance_repository: Arc<C>) -> Self {
        Self {
            compliance_repository,
        }
    }

    pub async fn record_consent(
        &self,
        user_id: Uuid,
        model: RecordConsentModel,
        client: ClientContext,
    ) -> Result<ConsentRecordDto, PrivacyError> {
        let consent_type = model
            .consent_type
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .ok_or(PrivacyError::MissingConsentType)?;
        if !is_known_consent_type(&consent_type) {
            return Err(PrivacyError::UnknownConsentType(consent_type));
        }
        let granted = model.granted.ok_or(PrivacyError::MissingGranted)?;

        let now = Utc::now();
        let record = self
            .compliance_repository
            .insert_consent(InsertConsentRecordEntity {
                user_id,
                consent_type: consent_type.clone(),
                granted,
                ip_address: client.ip_address.clone(),
                user_agent: client.user_agent.clone(),
                created_at: now,
            })
            .await
            .map_err(|err| {
                error!(%user_id, %consent_type, db_error = ?err, "privacy: failed to record consent");
                err
            })?;

        self.compliance_repository
            .insert_audit_log(InsertAuditLogEntity {
                user_id: Some(user_id),
                action: AUDIT_CONSENT_RECORDED.to_string(),
                details: json!({
                    "consentId": record.id,
                    "consentType": consent_type,
                    "granted": granted,
                    "userAgent": client.user_agent,
                }),
                ip_address: client.ip_address,
                created_at: now,
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "privacy: failed to write consent audit log");
                err
            })?;

        info!(%user_id, consent_type = %record.consent_type, granted, "privacy: consent recorded");

        Ok(record.into())
    }

    pub async fn list_consents(&self, user_id: Uuid) -> Result<Vec<ConsentRecordDto>, PrivacyError> {
        let records = self
            .compliance_repository
            .list_consents(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "privacy: failed to list consents");
                err
            })?;

        Ok(records.into_iter().map(ConsentRecordDto::from).collect())
    }

    /// Returns the open request when one exists; otherwise files a new one.
    pub async fn request_deletion(
        &self,
        user_id: Uuid,
        model: DeletionRequestModel,
        client: ClientContext,
    ) -> Result<DeletionRequestDto, PrivacyError> {
        let reason = model
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        if reason.as_ref().is_some_and(|r| r.chars().count() > MAX_REASON_LEN) {
            return Err(PrivacyError::ReasonTooLong);
        }

        if let Some(existing) = self
            .compliance_repository
            .find_pending_deletion_request(user_id)
            .await?
        {
            info!(%user_id, request_id = %existing.id, "privacy: deletion already pending");
            return Ok(existing.into());
        }

        let now = Utc::now();
        let request = self
            .compliance_repository
            .insert_deletion_request(InsertDeletionRequestEntity {
                user_id,
                reason,
                status: DeletionRequestStatus::Pending.to_string(),
                requested_at: now,
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "privacy: failed to file deletion request");
                err
            })?;

        self.compliance_repository
            .insert_audit_log(InsertAuditLogEntity {
                user_id: Some(user_id),
                action: AUDIT_DELETION_REQUESTED.to_string(),
                details: json!({
                    "requestId": request.id,
                    "userAgent": client.user_agent,
                }),
                ip_address: client.ip_address,
                created_at: now,
            })
            .await?;

        info!(%user_id, request_id = %request.id, "privacy: deletion requested");

        Ok(request.into())
    }
}
