use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, upsert::excluded};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::notification_preferences::NotificationPreferenceEntity,
        repositories::notification_preferences::NotificationPreferenceRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::notification_preferences},
};

pub struct NotificationPreferencePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl NotificationPreferencePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl NotificationPreferenceRepository for NotificationPreferencePostgres {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<NotificationPreferenceEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = notification_preferences::table
            .filter(notification_preferences::user_id.eq(user_id))
            .select(NotificationPreferenceEntity::as_select())
            .load::<NotificationPreferenceEntity>(&mut conn)?;

        Ok(results)
    }

    async fn upsert(
        &self,
        preference: NotificationPreferenceEntity,
    ) -> Result<NotificationPreferenceEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(notification_preferences::table)
            .values(&preference)
            .on_conflict((
                notification_preferences::user_id,
                notification_preferences::notification_type,
            ))
            .do_update()
            .set((
                notification_preferences::email_enabled
                    .eq(excluded(notification_preferences::email_enabled)),
                notification_preferences::push_enabled
                    .eq(excluded(notification_preferences::push_enabled)),
                notification_preferences::updated_at
                    .eq(excluded(notification_preferences::updated_at)),
            ))
            .returning(NotificationPreferenceEntity::as_returning())
            .get_result::<NotificationPreferenceEntity>(&mut conn)?;

        Ok(result)
    }
}
