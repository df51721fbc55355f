use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use recruit_core::domain::{
    repositories::{profiles::ProfileRepository, subscriptions::SubscriptionRepository},
    value_objects::enums::subscription_tiers::SubscriptionTier,
};
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResult {
    pub success: bool,
    pub processed: usize,
}

/// Expires lapsed subscriptions and moves their owners back to the free tier
/// unless they still hold another active subscription.
pub struct SubscriptionCleanupUseCase<S, P>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: ProfileRepository + Send + Sync + 'static,
{
    subscription_repository: Arc<S>,
    profile_repository: Arc<P>,
}

impl<S, P> SubscriptionCleanupUseCase<S, P>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: ProfileRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repository: Arc<S>, profile_repository: Arc<P>) -> Self {
        Self {
            subscription_repository,
            profile_repository,
        }
    }

    /// Stops at the first failure; rows already processed stay processed.
    pub async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<CleanupResult> {
        let expired = self
            .subscription_repository
            .find_expired_active(now)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "subscriptions: failed to load expired subscriptions");
                err
            })?;

        info!(count = expired.len(), "subscriptions: expired subscriptions found");

        for subscription in &expired {
            self.subscription_repository
                .mark_expired(subscription.id)
                .await
                .map_err(|err| {
                    error!(
                        subscription_id = %subscription.id,
                        db_error = ?err,
                        "subscriptions: failed to mark subscription expired"
                    );
                    err
                })?;

            let still_subscribed = self
                .subscription_repository
                .has_active_subscription(subscription.user_id, now)
                .await
                .map_err(|err| {
                    error!(
                        user_id = %subscription.user_id,
                        db_error = ?err,
                        "subscriptions: failed to check remaining subscriptions"
                    );
                    err
                })?;
            if still_subscribed {
                info!(
                    subscription_id = %subscription.id,
                    user_id = %subscription.user_id,
                    "subscriptions: subscription expired, owner keeps another active subscription"
                );
                continue;
            }

            self.profile_repository
                .update_subscription_tier(subscription.user_id, SubscriptionTier::Free)
                .await
                .map_err(|err| {
                    error!(
                        user_id = %subscription.user_id,
                        db_error = ?err,
                        "subscriptions: failed to downgrade profile"
                    );
                    err
                })?;

            info!(
                subscription_id = %subscription.id,
                user_id = %subscription.user_id,
                previous_tier = %subscription.tier,
                "subscriptions: subscription expired, profile downgraded to free"
            );
        }

        Ok(CleanupResult {
            success: true,
            processed: expired.len(),
        })
    }
}
