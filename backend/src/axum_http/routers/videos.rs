use axum::{
    Json, Router,
    extract::{Query, rejection::QueryRejection},
    routing::get,
};
use recruit_core::domain::value_objects::video_embeds::{VideoEmbed, classify_video_url};
use serde::Deserialize;

use crate::axum_http::error_responses::AppError;

#[derive(Debug, Deserialize)]
pub struct EmbedQuery {
    pub url: Option<String>,
}

pub fn routes() -> Router {
    Router::new().route("/embed", get(embed))
}

pub async fn embed(
    query: Result<Query<EmbedQuery>, QueryRejection>,
) -> Result<Json<VideoEmbed>, AppError> {
    let Query(query) = query?;
    let url = query
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Video URL is required".to_string()))?;

    Ok(Json(classify_video_url(&url)))
}
