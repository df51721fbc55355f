use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use recruit_core::{
    domain::{
        repositories::{media::MediaRepository, profiles::ProfileRepository},
        value_objects::profiles::PublicProfileDto,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{media::MediaPostgres, profiles::ProfilePostgres},
    },
};

use crate::{axum_http::error_responses::AppError, usecases::profiles::ProfileUseCase};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let profile_repository = ProfilePostgres::new(Arc::clone(&db_pool));
    let media_repository = MediaPostgres::new(Arc::clone(&db_pool));
    let profile_usecase =
        ProfileUseCase::new(Arc::new(profile_repository), Arc::new(media_repository));

    router(profile_usecase)
}

pub fn router<P, M>(profile_usecase: ProfileUseCase<P, M>) -> Router
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/:username", get(public_profile))
        .with_state(Arc::new(profile_usecase))
}

pub async fn public_profile<P, M>(
    State(profile_usecase): State<Arc<ProfileUseCase<P, M>>>,
    Path(username): Path<String>,
) -> Result<Json<PublicProfileDto>, AppError>
where
    P: ProfileRepository + Send + Sync + 'static,
    M: MediaRepository + Send + Sync + 'static,
{
    let profile = profile_usecase.get_public_profile(&username).await?;

    Ok(Json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use recruit_core::domain::{
        entities::{athlete_media::AthleteMediaEntity, profiles::ProfileEntity},
        repositories::{media::MockMediaRepository, profiles::MockProfileRepository},
        value_objects::enums::media_types::MediaType,
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unknown_username_is_404() {
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_public_by_username()
            .returning(|_| Ok(None));

        let app = router(ProfileUseCase::new(
            Arc::new(profiles),
            Arc::new(MockMediaRepository::new()),
        ));
        let (status, body) = get(app, "/nobody").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn renders_profile_with_embeddable_videos() {
        let now = Utc::now();
        let athlete_id = Uuid::new_v4();
        let profile = ProfileEntity {
            id: athlete_id,
            username: "pointguard".to_string(),
            full_name: Some("Sam Lee".to_string()),
            sport: Some("basketball".to_string()),
            position: Some("PG".to_string()),
            graduation_year: Some(2026),
            school: Some("Central High".to_string()),
            bio: None,
            is_public: true,
            subscription_tier: "premium".to_string(),
            stripe_customer_id: Some("cus_hidden".to_string()),
            created_at: now,
            updated_at: now,
        };
        let video = AthleteMediaEntity {
            id: Uuid::new_v4(),
            athlete_id,
            media_type: "video".to_string(),
            url: "https://vimeo.com/76979871".to_string(),
            title: Some("Senior highlights".to_string()),
            created_at: now,
        };

        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_public_by_username()
            .returning(move |_| Ok(Some(profile.clone())));
        let mut media = MockMediaRepository::new();
        media
            .expect_list_by_athlete()
            .returning(move |_, media_type| match media_type {
                MediaType::Video => Ok(vec![video.clone()]),
                MediaType::Photo => Ok(vec![]),
            });

        let app = router(ProfileUseCase::new(Arc::new(profiles), Arc::new(media)));
        let (status, body) = get(app, "/PointGuard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "pointguard");
        assert_eq!(body["tier"], "premium");
        assert!(body.get("stripeCustomerId").is_none());
        assert_eq!(body["videos"][0]["embedUrl"], "https://player.vimeo.com/video/76979871");
        assert_eq!(body["photos"].as_array().unwrap().len(), 0);
    }
}
