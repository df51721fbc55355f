use std::sync::Arc;

use chrono::Utc;
use recruit_core::domain::{
    entities::notification_preferences::NotificationPreferenceEntity,
    repositories::notification_preferences::NotificationPreferenceRepository,
    value_objects::{
        notification_preferences::{NotificationPreferenceDto, UpdateNotificationPreferenceModel},
        notification_types::{NOTIFICATION_TYPES, find_notification_type},
    },
};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

#[derive(Debug, Error)]
pub enum NotificationPreferenceError {
    #[error("Notification type is required")]
    MissingType,
    #[error("Unknown notification type: {0}")]
    UnknownType(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<NotificationPreferenceError> for AppError {
    fn from(value: NotificationPreferenceError) -> Self {
        match value {
            NotificationPreferenceError::MissingType | NotificationPreferenceError::UnknownType(_) => {
                AppError::BadRequest(value.to_string())
            }
            NotificationPreferenceError::Internal(_) => {
                AppError::Internal("Failed to update notification preferences".to_string())
            }
        }
    }
}

pub struct NotificationPreferenceUseCase<N>
where
    N: NotificationPreferenceRepository + Send + Sync + 'static,
{
    preference_repository: Arc<N>,
}

impl<N> NotificationPreferenceUseCase<N>
where
    N: NotificationPreferenceRepository + Send + Sync + 'static,
{
    pub fn new(preference_repository: Arc<N>) -> Self {
        Self {
            preference_repository,
        }
    }

    /// Every catalog entry, with the user's stored choices applied.
    pub async fn list(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<NotificationPreferenceDto>, NotificationPreferenceError> {
        let stored = self
            .preference_repository
            .list_by_user(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "notifications: failed to load preferences");
                err
            })?;

        Ok(NOTIFICATION_TYPES
            .iter()
            .map(|notification_type| {
                let stored = stored
                    .iter()
                    .find(|p| p.notification_type == notification_type.id);
                NotificationPreferenceDto::merge(notification_type, stored)
            })
            .collect())
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        model: UpdateNotificationPreferenceModel,
    ) -> Result<NotificationPreferenceDto, NotificationPreferenceError> {
        let type_id = model
            .type_
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(NotificationPreferenceError::MissingType)?;
        let notification_type = find_notification_type(&type_id)
            .ok_or(NotificationPreferenceError::UnknownType(type_id))?;

        let current = if model.email.is_none() || model.push.is_none() {
            self.preference_repository
                .list_by_user(user_id)
                .await?
                .into_iter()
                .find(|p| p.notification_type == notification_type.id)
        } else {
            None
        };
        let current = NotificationPreferenceDto::merge(notification_type, current.as_ref());

        let preference = NotificationPreferenceEntity {
            user_id,
            notification_type: notification_type.id.to_string(),
            email_enabled: model.email.unwrap_or(current.email),
            push_enabled: model.push.unwrap_or(current.push),
            updated_at: Utc::now(),
        };

        let saved = self
            .preference_repository
            .upsert(preference)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    notification_type = notification_type.id,
                    db_error = ?err,
                    "notifications: failed to save preference"
                );
                err
            })?;

        info!(
            %user_id,
            notification_type = notification_type.id,
            email = saved.email_enabled,
            push = saved.push_enabled,
            "notifications: preference saved"
        );

        Ok(NotificationPreferenceDto::merge(notification_type, Some(&saved)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_core::domain::repositories::notification_preferences::MockNotificationPreferenceRepository;

    fn stored(user_id: Uuid, type_id: &str, email: bool, push: bool) -> NotificationPreferenceEntity {
        NotificationPreferenceEntity {
            user_id,
            notification_type: type_id.to_string(),
            email_enabled: email,
            push_enabled: push,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_applies_stored_overrides_to_catalog() {
        let user_id = Uuid::new_v4();
        let rows = vec![stored(user_id, "weekly_digest", false, true)];

        let mut repo = MockNotificationPreferenceRepository::new();
        repo.expect_list_by_user()
            .returning(move |_| Ok(rows.clone()));

        let usecase = NotificationPreferenceUseCase::new(Arc::new(repo));
        let prefs = usecase.list(user_id).await.unwrap();

        assert_eq!(prefs.len(), NOTIFICATION_TYPES.len());
        let digest = prefs.iter().find(|p| p.type_ == "weekly_digest").unwrap();
        assert!(!digest.email);
        assert!(digest.push);

        let review = prefs.iter().find(|p| p.type_ == "review_received").unwrap();
        assert!(review.email && review.push);
    }

    #[tokio::test]
    async fn update_fills_missing_channels_from_defaults() {
        let user_id = Uuid::new_v4();
        let mut repo = MockNotificationPreferenceRepository::new();
        repo.expect_list_by_user().returning(|_| Ok(vec![]));
        repo.expect_upsert()
            .withf(move |p| {
                p.user_id == user_id
                    && p.notification_type == "profile_view"
                    && p.email_enabled
                    && p.push_enabled
            })
            .times(1)
            .returning(|p| Ok(p));

        let usecase = NotificationPreferenceUseCase::new(Arc::new(repo));
        let dto = usecase
            .update(
                user_id,
                UpdateNotificationPreferenceModel {
                    type_: Some("profile_view".to_string()),
                    email: Some(true),
                    push: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(dto.type_, "profile_view");
        assert!(dto.email && dto.push);
    }

    #[tokio::test]
    async fn update_keeps_stored_channel_when_omitted() {
        let user_id = Uuid::new_v4();
        let rows = vec![stored(user_id, "coach_message", true, false)];

        let mut repo = MockNotificationPreferenceRepository::new();
        repo.expect_list_by_user()
            .returning(move |_| Ok(rows.clone()));
        repo.expect_upsert()
            .withf(|p| !p.email_enabled && !p.push_enabled)
            .times(1)
            .returning(|p| Ok(p));

        let usecase = NotificationPreferenceUseCase::new(Arc::new(repo));
        let dto = usecase
            .update(
                user_id,
                UpdateNotificationPreferenceModel {
                    type_: Some("coach_message".to_string()),
                    email: Some(false),
                    push: None,
                },
            )
            .await
            .unwrap();

        assert!(!dto.email);
        assert!(!dto.push);
    }

    #[tokio::test]
    async fn update_rejects_unknown_type() {
        let mut repo = MockNotificationPreferenceRepository::new();
        repo.expect_upsert().never();

        let usecase = NotificationPreferenceUseCase::new(Arc::new(repo));
        let err = usecase
            .update(
                Uuid::new_v4(),
                UpdateNotificationPreferenceModel {
                    type_: Some("carrier_pigeon".to_string()),
                    email: Some(true),
                    push: Some(true),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Unknown notification type: carrier_pigeon");
    }
}
