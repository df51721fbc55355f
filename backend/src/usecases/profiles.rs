use std::sync::Arc;

use recruit_core::domain::{
    repositories::{media::MediaRepository, profiles::ProfileRepository},
    value_objects::{
        enums::media_types::MediaType,
        profiles::{PublicPhotoDto, PublicProfileDto, PublicVideoDto},
    },
};
use thiserror::Error;
use tracing::{debug, error};

use crate::axum_http::error_responses::AppError;

const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ProfileError> for AppError {
    fn from(value: ProfileError) -> Self {
        match value {
            ProfileError::NotFound => AppError::NotFound(value.to_string()),
            ProfileError::Internal(_) => AppError::Internal("Failed to load profile".to_string()),
        }
    }
}

pub struct ProfileUseCase<P, M>
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    profile_repository: Arc<P>,
    media_repository: Arc<M>,
}

impl<P, M> ProfileUseCase<P, M>
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

    pub async fn get_public_profile(&self, username: &str) -> Result<PublicProfileDto, ProfileError> {
        let username = username.trim().to_lowercase();
        if username.is_empty() || username.len() > MAX_USERNAME_LEN {
            return Err(ProfileError::NotFound);
        }

        let profile = self
            .profile_repository
            .find_public_by_username(username.clone())
            .await
            .map_err(|err| {
                error!(%username, db_error = ?err, "profiles: failed to load public profile");
                err
            })?
            .ok_or_else(|| {
                debug!(%username, "profiles: no public profile for username");
                ProfileError::NotFound
            })?;

        let videos = self
            .media_repository
            .list_by_athlete(profile.id, MediaType::Video)
            .await
            .map_err(|err| {
                error!(athlete_id = %profile.id, db_error = ?err, "profiles: failed to load videos");
                err
            })?;

        let photos = self
            .media_repository
            .list_by_athlete(profile.id, MediaType::Photo)
            .await
            .map_err(|err| {
                error!(athlete_id = %profile.id, db_error = ?err, "profiles: failed to load photos");
                err
            })?;

        Ok(PublicProfileDto::new(
            profile,
            videos.into_iter().map(PublicVideoDto::from).collect(),
            photos.into_iter().map(PublicPhotoDto::from).collect(),
        ))
    }
}
