use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use recruit_core::{
    domain::{
        repositories::{media::MediaRepository, profiles::ProfileRepository},
        value_objects::media::{CheckUploadModel, MediaLimitsDto, UploadAllowanceDto},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{media::MediaPostgres, profiles::ProfilePostgres},
    },
};

use crate::{auth::AuthUser, axum_http::error_responses::AppError, usecases::media::MediaUseCase};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let profile_repository = ProfilePostgres::new(Arc::clone(&db_pool));
    let media_repository = MediaPostgres::new(Arc::clone(&db_pool));
    let media_usecase = MediaUseCase::new(Arc::new(profile_repository), Arc::new(media_repository));

    router(media_usecase)
}

pub fn router<P, M>(media_usecase: MediaUseCase<P, M>) -> Router
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/limits", get(limits))
        .route("/check-upload", post(check_upload))
        .with_state(Arc::new(media_usecase))
}

pub async fn limits<P, M>(
    State(media_usecase): State<Arc<MediaUseCase<P, M>>>,
    auth: AuthUser,
) -> Result<Json<MediaLimitsDto>, AppError>
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    let limits = media_usecase.get_limits(auth.user_id).await?;

    Ok(Json(limits))
}

pub async fn check_upload<P, M>(
    State(media_usecase): State<Arc<MediaUseCase<P, M>>>,
    auth: AuthUser,
    payload: Result<Json<CheckUploadModel>, JsonRejection>,
) -> Result<Json<UploadAllowanceDto>, AppError>
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    let Json(model) = payload?;
    let allowance = media_usecase
        .check_upload(auth.user_id, model.media_type)
        .await?;

    Ok(Json(allowance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::test_support::{auth_config, bearer};
    use axum::{
        Extension,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
        response::Response,
    };
    use chrono::Utc;
    use recruit_core::domain::{
        entities::profiles::ProfileEntity,
        repositories::{media::MockMediaRepository, profiles::MockProfileRepository},
        value_objects::media::MediaUsage,
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn profiles_on_tier(tier: &str) -> MockProfileRepository {
        let now = Utc::now();
        let profile = ProfileEntity {
            id: Uuid::new_v4(),
            username: "keeper1".to_string(),
            full_name: None,
            sport: Some("soccer".to_string()),
            position: Some("goalkeeper".to_string()),
            graduation_year: Some(2026),
            school: None,
            bio: None,
            is_public: true,
            subscription_tier: tier.to_string(),
            stripe_customer_id: None,
            created_at: now,
            updated_at: now,
        };
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(profile.clone())));
        repo
    }

    fn media_with_usage(videos: u32, photos: u32) -> MockMediaRepository {
        let mut repo = MockMediaRepository::new();
        repo.expect_count_usage()
            .returning(move |_| Ok(MediaUsage { videos, photos }));
        repo
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn app(profiles: MockProfileRepository, media: MockMediaRepository) -> Router {
        router(MediaUseCase::new(Arc::new(profiles), Arc::new(media)))
            .layer(Extension(auth_config()))
    }

    fn check_upload_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/check-upload")
            .header(AUTHORIZATION, bearer(Uuid::new_v4()))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn limits_reports_usage_and_flags() {
        let request = Request::builder()
            .uri("/limits")
            .header(AUTHORIZATION, bearer(Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(profiles_on_tier("free"), media_with_usage(3, 4)), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], "free");
        assert_eq!(body["limits"]["maxVideos"], 3);
        assert_eq!(body["canUploadVideo"], false);
        assert_eq!(body["canUploadPhoto"], true);
    }

    #[tokio::test]
    async fn quota_reached_is_forbidden_with_upgrade_message() {
        let (status, body) = send(
            app(profiles_on_tier("free"), media_with_usage(3, 0)),
            check_upload_request(r#"{"mediaType":"video"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body["error"].as_str().unwrap().contains("Premium"));
    }

    #[tokio::test]
    async fn allowed_upload_reports_remaining() {
        let (status, body) = send(
            app(profiles_on_tier("premium"), media_with_usage(0, 20)),
            check_upload_request(r#"{"mediaType":"photo"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], true);
        assert_eq!(body["remaining"], 30);
    }

    #[tokio::test]
    async fn unknown_media_type_is_bad_request() {
        let (status, _) = send(
            app(MockProfileRepository::new(), MockMediaRepository::new()),
            check_upload_request(r#"{"mediaType":"hologram"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
