use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::post,
};
use chrono::Utc;
use recruit_core::{
    domain::repositories::{profiles::ProfileRepository, subscriptions::SubscriptionRepository},
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{profiles::ProfilePostgres, subscriptions::SubscriptionPostgres},
    },
};
use tracing::{error, warn};

use crate::{
    auth::{bearer_token, secrets_match},
    axum_http::error_responses::AppError,
    usecases::subscriptions::{CleanupResult, SubscriptionCleanupUseCase},
};

pub struct CronState<S, P>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: ProfileRepository + Send + Sync + 'static,
{
    pub cleanup_usecase: SubscriptionCleanupUseCase<S, P>,
    pub cron_secret: String,
}

pub fn routes(db_pool: Arc<PgPoolSquad>, cron_secret: String) -> Router {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let profile_repository = ProfilePostgres::new(Arc::clone(&db_pool));
    let cleanup_usecase = SubscriptionCleanupUseCase::new(
        Arc::new(subscription_repository),
        Arc::new(profile_repository),
    );

    router(cleanup_usecase, cron_secret)
}

pub fn router<S, P>(cleanup_usecase: SubscriptionCleanupUseCase<S, P>, cron_secret: String) -> Router
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: ProfileRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/cleanup-expired", post(cleanup_expired))
        .with_state(Arc::new(CronState {
            cleanup_usecase,
            cron_secret,
        }))
}

pub async fn cleanup_expired<S, P>(
    State(state): State<Arc<CronState<S, P>>>,
    headers: HeaderMap,
) -> Result<Json<CleanupResult>, AppError>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: ProfileRepository + Send + Sync + 'static,
{
    let authorized = bearer_token(&headers)
        .is_some_and(|token| !state.cron_secret.is_empty() && secrets_match(token, &state.cron_secret));
    if !authorized {
        warn!("subscriptions: cleanup called without a valid cron secret");
        return Err(AppError::Unauthorized);
    }

    let result = state
        .cleanup_usecase
        .cleanup_expired(Utc::now())
        .await
        .map_err(|err| {
            error!(error = ?err, "subscriptions: cleanup aborted");
            AppError::Internal("Failed to clean up expired subscriptions".to_string())
        })?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use chrono::Duration;
    use recruit_core::domain::{
        entities::subscriptions::SubscriptionEntity,
        repositories::{profiles::MockProfileRepository, subscriptions::MockSubscriptionRepository},
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    const CRON_SECRET: &str = "cron-secret-for-tests";

    fn app(subscriptions: MockSubscriptionRepository, profiles: MockProfileRepository) -> Router {
        router(
            SubscriptionCleanupUseCase::new(Arc::new(subscriptions), Arc::new(profiles)),
            CRON_SECRET.to_string(),
        )
    }

    fn cleanup_request(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/cleanup-expired");
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn rejects_wrong_secret() {
        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions.expect_find_expired_active().never();

        let response = app(subscriptions, MockProfileRepository::new())
            .oneshot(cleanup_request(Some("Bearer guessed")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let response = app(MockSubscriptionRepository::new(), MockProfileRepository::new())
            .oneshot(cleanup_request(None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn reports_processed_count() {
        let now = Utc::now();
        let subscription = SubscriptionEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            tier: "pro".to_string(),
            status: "active".to_string(),
            stripe_subscription_id: None,
            current_period_end: now - Duration::hours(2),
            created_at: now - Duration::days(30),
            updated_at: now - Duration::days(30),
        };

        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions
            .expect_find_expired_active()
            .returning(move |_| Ok(vec![subscription.clone()]));
        subscriptions.expect_mark_expired().times(1).returning(|_| Ok(()));
        subscriptions
            .expect_has_active_subscription()
            .returning(|_, _| Ok(false));
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_update_subscription_tier()
            .times(1)
            .returning(|_, _| Ok(()));

        let response = app(subscriptions, profiles)
            .oneshot(cleanup_request(Some(&format!("Bearer {CRON_SECRET}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"success": true, "processed": 1})
        );
    }

    #[tokio::test]
    async fn store_failure_is_500() {
        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions
            .expect_find_expired_active()
            .returning(|_| Err(anyhow::anyhow!("relation does not exist")));

        let response = app(subscriptions, MockProfileRepository::new())
            .oneshot(cleanup_request(Some(&format!("Bearer {CRON_SECRET}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["error"],
            "Failed to clean up expired subscriptions"
        );
    }
}
