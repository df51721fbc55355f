use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    audit_logs::InsertAuditLogEntity,
    consent_records::{ConsentRecordEntity, InsertConsentRecordEntity},
    deletion_requests::{DeletionRequestEntity, InsertDeletionRequestEntity},
};

#[automock]
#[async_trait]
pub trait ComplianceRepository {
    async fn insert_consent(
        &self,
        consent: InsertConsentRecordEntity,
    ) -> Result<ConsentRecordEntity>;

    async fn list_consents(&self, user_id: Uuid) -> Result<Vec<ConsentRecordEntity>>;

    async fn find_pending_deletion_request(
        &self,
        user_id: Uuid,
    ) -> Result<Option<DeletionRequestEntity>>;

    async fn insert_deletion_request(
        &self,
        request: InsertDeletionRequestEntity,
    ) -> Result<DeletionRequestEntity>;

    async fn insert_audit_log(&self, entry: InsertAuditLogEntity) -> Result<()>;
}
