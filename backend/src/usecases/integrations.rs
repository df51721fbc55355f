use std::sync::Arc;

use recruit_core::domain::repositories::integration_tokens::IntegrationTokenRepository;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("Provider is required")]
    MissingProvider,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<IntegrationError> for AppError {
    fn from(value: IntegrationError) -> Self {
        match value {
            IntegrationError::MissingProvider => AppError::BadRequest(value.to_string()),
            IntegrationError::Internal(_) => {
                AppError::Internal("Failed to disconnect integration".to_string())
            }
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisconnectResult {
    pub success: bool,
    pub provider: String,
    pub message: String,
}

pub struct IntegrationUseCase<T>
where
    T: IntegrationTokenRepository + Send + Sync + 'static,
{
    integration_token_repository: Arc<T>,
}

impl<T> IntegrationUseCase<T>
where
    T: IntegrationTokenRepository + Send + Sync + 'static,
{
    pub fn new(integration_token_repository: Arc<T>) -> Self {
        Self {
            integration_token_repository,
        }
    }

    pub async fn disconnect(
        &self,
        user_id: Uuid,
        provider: Option<String>,
    ) -> Result<DisconnectResult, IntegrationError> {
        let provider = provider
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .ok_or(IntegrationError::MissingProvider)?;

        info!(%user_id, %provider, "integrations: disconnect requested");

        let removed = self
            .integration_token_repository
            .delete_by_user_and_provider(user_id, provider.clone())
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    %provider,
                    db_error = ?err,
                    "integrations: failed to delete stored tokens"
                );
                err
            })?;

        info!(%user_id, %provider, removed, "integrations: tokens removed");

        Ok(DisconnectResult {
            success: true,
            message: format!("{} disconnected successfully", provider),
            provider,
        })
    }
}
