use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    routing::post,
};
use recruit_core::{
    domain::repositories::profiles::ProfileRepository,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::profiles::ProfilePostgres,
    },
    payments::stripe_client::StripeClient,
};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    axum_http::error_responses::{AppError, optional_json_body},
    usecases::billing::{BillingUseCase, PortalSessionDto, StripeGateway},
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSessionModel {
    pub return_path: Option<String>,
}

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    stripe_client: Arc<StripeClient>,
    portal_return_url: String,
) -> Router {
    let profile_repository = ProfilePostgres::new(Arc::clone(&db_pool));
    let billing_usecase = BillingUseCase::new(
        Arc::new(profile_repository),
        stripe_client,
        portal_return_url,
    );

    router(billing_usecase)
}

pub fn router<P, G>(billing_usecase: BillingUseCase<P, G>) -> Router
where
    P: ProfileRepository + Send + Sync + 'static,
    G: StripeGateway + 'static,
{
    Router::new()
        .route("/portal", post(create_portal_session))
        .with_state(Arc::new(billing_usecase))
}

/// The body is optional; an empty body uses the configured return URL.
pub async fn create_portal_session<P, G>(
    State(billing_usecase): State<Arc<BillingUseCase<P, G>>>,
    auth: AuthUser,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PortalSessionDto>, AppError>
where
    P: ProfileRepository + Send + Sync + 'static,
    G: StripeGateway + 'static,
{
    let model: PortalSessionModel = optional_json_body(&body?)?;
    let session = billing_usecase
        .create_portal_session(auth.user_id, model.return_path)
        .await?;

    Ok(Json(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::test_support::{auth_config, bearer},
        usecases::billing::MockStripeGateway,
    };
    use axum::{
        Extension,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
        response::Response,
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use recruit_core::{
        domain::{entities::profiles::ProfileEntity, repositories::profiles::MockProfileRepository},
        payments::stripe_client::BillingPortalSession,
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    const RETURN_URL: &str = "https://app.example.com/dashboard";

    fn profile_with_customer(user_id: Uuid, customer: Option<&str>) -> MockProfileRepository {
        let now = Utc::now();
        let profile = ProfileEntity {
            id: user_id,
            username: "sprinter".to_string(),
            full_name: None,
            sport: Some("track".to_string()),
            position: None,
            graduation_year: None,
            school: None,
            bio: None,
            is_public: true,
            subscription_tier: "pro".to_string(),
            stripe_customer_id: customer.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(profile.clone())));
        repo
    }

    async fn call(
        profiles: MockProfileRepository,
        gateway: MockStripeGateway,
        auth: Option<String>,
        body: Body,
    ) -> Response {
        let app = router(BillingUseCase::new(
            Arc::new(profiles),
            Arc::new(gateway),
            RETURN_URL.to_string(),
        ))
        .layer(Extension(auth_config()));

        let mut builder = Request::builder()
            .method("POST")
            .uri("/portal")
            .header(CONTENT_TYPE, "application/json");
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        app.oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn requires_user() {
        let response = call(
            MockProfileRepository::new(),
            MockStripeGateway::new(),
            None,
            Body::empty(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn returns_portal_url_for_requested_path() {
        let user_id = Uuid::new_v4();
        let mut gateway = MockStripeGateway::new();
        gateway
            .expect_create_billing_portal_session()
            .with(
                eq("cus_42".to_string()),
                eq("https://app.example.com/settings".to_string()),
            )
            .times(1)
            .returning(|_, _| {
                Ok(BillingPortalSession {
                    id: "bps_42".to_string(),
                    url: "https://billing.stripe.com/p/session/42".to_string(),
                })
            });

        let response = call(
            profile_with_customer(user_id, Some("cus_42")),
            gateway,
            Some(bearer(user_id)),
            Body::from(r#"{"returnPath":"/settings"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"url": "https://billing.stripe.com/p/session/42"})
        );
    }

    #[tokio::test]
    async fn profile_without_customer_is_404() {
        let user_id = Uuid::new_v4();
        let response = call(
            profile_with_customer(user_id, None),
            MockStripeGateway::new(),
            Some(bearer(user_id)),
            Body::empty(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "No billing account found");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let user_id = Uuid::new_v4();
        let response = call(
            MockProfileRepository::new(),
            MockStripeGateway::new(),
            Some(bearer(user_id)),
            Body::from(r#"{"returnPath":"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }
}
