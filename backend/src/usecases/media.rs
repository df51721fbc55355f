use std::sync::Arc;

use recruit_core::domain::{
    entities::profiles::ProfileEntity,
    repositories::{media::MediaRepository, profiles::ProfileRepository},
    value_objects::{
        enums::media_types::MediaType,
        media::{MediaLimitsDto, UploadAllowanceDto},
        subscription_tiers::{can_upload_more, get_upgrade_message, remaining_uploads},
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Media type is required")]
    MissingMediaType,
    #[error("{0}")]
    InvalidMediaType(String),
    #[error("{0}")]
    LimitReached(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<MediaError> for AppError {
    fn from(value: MediaError) -> Self {
        match value {
            MediaError::ProfileNotFound => AppError::NotFound(value.to_string()),
            MediaError::MissingMediaType | MediaError::InvalidMediaType(_) => {
                AppError::BadRequest(value.to_string())
            }
            MediaError::LimitReached(message) => AppError::Forbidden(message.to_string()),
            MediaError::Internal(_) => AppError::Internal("Failed to check media limits".to_string()),
        }
    }
}

pub struct MediaUseCase<P, M>
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    profile_repository: Arc<P>,
    media_repository: Arc<M>,
}

impl<P, M> MediaUseCase<P, M>
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    pub fn new(profile_repository: Arc<P>, media_repository: Arc<M>) -> Self {
        Self {
            profile_repository,
            media_repository,
        }
    }

    pub async fn get_limits(&self, user_id: Uuid) -> Result<MediaLimitsDto, MediaError> {
        let profile = self.load_profile(user_id).await?;
        let usage = self.media_repository.count_usage(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "media: failed to count uploads");
            err
        })?;

        Ok(MediaLimitsDto::new(profile.tier(), usage))
    }

    pub async fn check_upload(
        &self,
        user_id: Uuid,
        media_type: Option<String>,
    ) -> Result<UploadAllowanceDto, MediaError> {
        let media_type = media_type
            .filter(|value| !value.trim().is_empty())
            .ok_or(MediaError::MissingMediaType)?
            .parse::<MediaType>()
            .map_err(MediaError::InvalidMediaType)?;

        let profile = self.load_profile(user_id).await?;
        let tier = profile.tier();
        let usage = self.media_repository.count_usage(user_id).await.map_err(|err| {
            error!(%user_id, db_error = ?err, "media: failed to count uploads");
            err
        })?;
        let current = usage.count_for(media_type);

        if !can_upload_more(tier, media_type, current) {
            warn!(
                %user_id,
                tier = %tier,
                media_type = %media_type,
                current,
                status = axum::http::StatusCode::FORBIDDEN.as_u16(),
                "media: upload limit reached"
            );
            return Err(MediaError::LimitReached(get_upgrade_message(tier)));
        }

        let remaining = remaining_uploads(tier, media_type, current);
        info!(%user_id, media_type = %media_type, remaining, "media: upload allowed");

        Ok(UploadAllowanceDto {
            allowed: true,
            media_type,
            remaining,
        })
    }

    async fn load_profile(&self, user_id: Uuid) -> Result<ProfileEntity, MediaError> {
        self.profile_repository
            .find_by_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "media: failed to load profile");
                err
            })?
            .ok_or(MediaError::ProfileNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use recruit_core::domain::{
        repositories::{media::MockMediaRepository, profiles::MockProfileRepository},
        value_objects::{enums::subscription_tiers::SubscriptionTier, media::MediaUsage},
    };

    fn profile_with_tier(user_id: Uuid, tier: &str) -> ProfileEntity {
        let now = Utc::now();
        ProfileEntity {
            id: user_id,
            username: "jdoe".to_string(),
            full_name: None,
            sport: None,
            position: None,
            graduation_year: None,
            school: None,
            bio: None,
            is_public: false,
            subscription_tier: tier.to_string(),
            stripe_customer_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn usecase(
        profile: Option<ProfileEntity>,
        usage: MediaUsage,
    ) -> MediaUseCase<MockProfileRepository, MockMediaRepository> {
        let mut profile_repo = MockProfileRepository::new();
        profile_repo
            .expect_find_by_id()
            .returning(move |_| Ok(profile.clone()));

        let mut media_repo = MockMediaRepository::new();
        media_repo.expect_count_usage().returning(move |_| Ok(usage));

        MediaUseCase::new(Arc::new(profile_repo), Arc::new(media_repo))
    }

    #[tokio::test]
    async fn limits_reflect_tier_and_usage() {
        let user_id = Uuid::new_v4();
        let usage = MediaUsage { videos: 3, photos: 4 };
        let limits = usecase(Some(profile_with_tier(user_id, "free")), usage)
            .get_limits(user_id)
            .await
            .unwrap();

        assert_eq!(limits.tier, SubscriptionTier::Free);
        assert!(!limits.can_upload_video);
        assert!(limits.can_upload_photo);
        assert!(limits.upgrade_message.contains("Premium"));
    }

    #[tokio::test]
    async fn unknown_stored_tier_is_treated_as_free() {
        let user_id = Uuid::new_v4();
        let limits = usecase(Some(profile_with_tier(user_id, "legacy")), MediaUsage::default())
            .get_limits(user_id)
            .await
            .unwrap();

        assert_eq!(limits.tier, SubscriptionTier::Free);
    }

    #[tokio::test]
    async fn check_upload_reports_remaining_slots() {
        let user_id = Uuid::new_v4();
        let usage = MediaUsage { videos: 10, photos: 0 };
        let allowance = usecase(Some(profile_with_tier(user_id, "premium")), usage)
            .check_upload(user_id, Some("video".to_string()))
            .await
            .unwrap();

        assert!(allowance.allowed);
        assert_eq!(allowance.media_type, MediaType::Video);
        assert_eq!(allowance.remaining, 5);
    }

    #[tokio::test]
    async fn check_upload_at_cap_returns_upgrade_message() {
        let user_id = Uuid::new_v4();
        let usage = MediaUsage { videos: 0, photos: 50 };
        let err = usecase(Some(profile_with_tier(user_id, "premium")), usage)
            .check_upload(user_id, Some("photo".to_string()))
            .await
            .unwrap_err();

        let app_error = AppError::from(err);
        assert_eq!(app_error.status_code(), axum::http::StatusCode::FORBIDDEN);
        assert!(app_error.to_string().contains("Pro"));
    }

    #[tokio::test]
    async fn check_upload_validates_media_type() {
        let user_id = Uuid::new_v4();
        let uc = usecase(Some(profile_with_tier(user_id, "pro")), MediaUsage::default());

        let err = uc.check_upload(user_id, None).await.unwrap_err();
        assert!(matches!(err, MediaError::MissingMediaType));

        let err = uc
            .check_upload(user_id, Some("hologram".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::InvalidMediaType(_)));
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let err = usecase(None, MediaUsage::default())
            .get_limits(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::ProfileNotFound));
    }
}
