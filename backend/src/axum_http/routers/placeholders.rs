use axum::{
    Router,
    extract::{Query, rejection::QueryRejection},
    http::{
        HeaderValue,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
    routing::get,
};
use recruit_core::domain::value_objects::placeholder_svg::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, clamp_dimension, render_placeholder_svg,
};
use serde::Deserialize;

use crate::axum_http::error_responses::AppError;

const CACHE_FOREVER: &str = "public, max-age=31536000, immutable";

#[derive(Debug, Deserialize)]
pub struct PlaceholderQuery {
    pub width: Option<String>,
    pub height: Option<String>,
    pub text: Option<String>,
}

pub fn routes() -> Router {
    Router::new().route("/", get(placeholder))
}

pub async fn placeholder(
    query: Result<Query<PlaceholderQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let width = parse_dimension(query.width.as_deref(), "width")?;
    let height = parse_dimension(query.height.as_deref(), "height")?;

    let svg = render_placeholder_svg(
        clamp_dimension(width, DEFAULT_WIDTH),
        clamp_dimension(height, DEFAULT_HEIGHT),
        query.text.as_deref(),
    );

    let mut response = svg.into_response();
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/svg+xml"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_FOREVER));

    Ok(response)
}

/// Digit strings too large for `u32` saturate so the clamp caps them.
fn parse_dimension(value: Option<&str>, name: &str) -> Result<Option<u32>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) if raw.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(Some(raw.parse::<u32>().unwrap_or(u32::MAX)))
        }
        Some(_) => Err(AppError::BadRequest(format!("Invalid {}", name))),
    }
}
