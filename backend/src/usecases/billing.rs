use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use recruit_core::{
    domain::repositories::profiles::ProfileRepository,
    payments::stripe_client::{BillingPortalSession, StripeClient},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StripeGateway: Send + Sync {
    async fn create_billing_portal_session(
        &self,
        customer_id: String,
        return_url: String,
    ) -> AnyResult<BillingPortalSession>;
}

#[async_trait]
impl StripeGateway for StripeClient {
    async fn create_billing_portal_session(
        &self,
        customer_id: String,
        return_url: String,
    ) -> AnyResult<BillingPortalSession> {
        StripeClient::create_billing_portal_session(self, &customer_id, &return_url).await
    }
}

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("No billing account found")]
    NoCustomer,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<BillingError> for AppError {
    fn from(value: BillingError) -> Self {
        match value {
            BillingError::ProfileNotFound | BillingError::NoCustomer => {
                AppError::NotFound(value.to_string())
            }
            BillingError::Internal(_) => {
                AppError::Internal("Failed to create billing portal session".to_string())
            }
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PortalSessionDto {
    pub url: String,
}

pub struct BillingUseCase<P, G>
where
    P: ProfileRepository + Send + Sync + 'static,
    G: StripeGateway + 'static,
{
    profile_repository: Arc<P>,
    stripe_gateway: Arc<G>,
    default_return_url: String,
}

impl<P, G> BillingUseCase<P, G>
where
    P: ProfileRepository + Send + Sync + 'static,
    G: StripeGateway + 'static,
{
    pub fn new(profile_repository: Arc<P>, stripe_gateway: Arc<G>, default_return_url: String) -> Self {
        Self {
            profile_repository,
            stripe_gateway,
            default_return_url,
        }
    }

    pub async fn create_portal_session(
        &self,
        user_id: Uuid,
        return_path: Option<String>,
    ) -> Result<PortalSessionDto, BillingError> {
        let profile = self
            .profile_repository
            .find_by_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "billing: failed to load profile");
                err
            })?
            .ok_or(BillingError::ProfileNotFound)?;

        let customer_id = profile
            .stripe_customer_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                warn!(%user_id, "billing: profile has no stripe customer");
                BillingError::NoCustomer
            })?;

        let return_url = resolve_return_url(&self.default_return_url, return_path.as_deref());

        let session = self
            .stripe_gateway
            .create_billing_portal_session(customer_id, return_url)
            .await
            .map_err(|err| {
                error!(%user_id, stripe_error = ?err, "billing: failed to create portal session");
                err
            })?;

        info!(%user_id, session_id = %session.id, "billing: portal session created");

        Ok(PortalSessionDto { url: session.url })
    }
}

/// Resolves a same-site path against the configured return URL.
/// Anything that could leave the site falls back to the default.
pub fn resolve_return_url(default: &str, requested_path: Option<&str>) -> String {
    let Some(path) = requested_path.map(str::trim) else {
        return default.to_string();
    };
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return default.to_string();
    }

    let Ok(base) = Url::parse(default) else {
        return default.to_string();
    };
    match base.join(path) {
        Ok(joined) if joined.origin() == base.origin() => joined.to_string(),
        _ => default.to_string(),
    }
}
