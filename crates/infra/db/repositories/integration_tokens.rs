use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::repositories::integration_tokens::IntegrationTokenRepository,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::integration_tokens},
};

pub struct IntegrationTokenPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl IntegrationTokenPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl IntegrationTokenRepository for IntegrationTokenPostgres {
    async fn delete_by_user_and_provider(&self, user_id: Uuid, provider: String) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(
            integration_tokens::table
                .filter(integration_tokens::user_id.eq(user_id))
                .filter(integration_tokens::provider.eq(provider)),
        )
        .execute(&mut conn)?;

        Ok(deleted)
    }
}
