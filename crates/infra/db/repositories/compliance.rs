use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            audit_logs::InsertAuditLogEntity,
            consent_records::{ConsentRecordEntity, InsertConsentRecordEntity},
            deletion_requests::{DeletionRequestEntity, InsertDeletionRequestEntity},
        },
        repositories::compliance::ComplianceRepository,
        value_objects::enums::deletion_request_statuses::DeletionRequestStatus,
    },
    infra::db::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{audit_logs, consent_records, deletion_requests},
    },
};

pub struct CompliancePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CompliancePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ComplianceRepository for CompliancePostgres {
    async fn insert_consent(
        &self,
        consent: InsertConsentRecordEntity,
    ) -> Result<ConsentRecordEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(consent_records::table)
            .values(&consent)
            .returning(ConsentRecordEntity::as_returning())
            .get_result::<ConsentRecordEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list_consents(&self, user_id: Uuid) -> Result<Vec<ConsentRecordEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = consent_records::table
            .filter(consent_records::user_id.eq(user_id))
            .order(consent_records::created_at.desc())
            .select(ConsentRecordEntity::as_select())
            .load::<ConsentRecordEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_pending_deletion_request(
        &self,
        user_id: Uuid,
    ) -> Result<Option<DeletionRequestEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = deletion_requests::table
            .filter(deletion_requests::user_id.eq(user_id))
            .filter(deletion_requests::status.eq(DeletionRequestStatus::Pending.to_string()))
            .order(deletion_requests::requested_at.desc())
            .select(DeletionRequestEntity::as_select())
            .first::<DeletionRequestEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn insert_deletion_request(
        &self,
        request: InsertDeletionRequestEntity,
    ) -> Result<DeletionRequestEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(deletion_requests::table)
            .values(&request)
            .returning(DeletionRequestEntity::as_returning())
            .get_result::<DeletionRequestEntity>(&mut conn)?;

        Ok(result)
    }

    async fn insert_audit_log(&self, entry: InsertAuditLogEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(audit_logs::table)
            .values(&entry)
            .execute(&mut conn)?;

        Ok(())
    }
}
