use axum::{Json, Router, http::HeaderMap, routing::get};

use crate::axum_http::client_info::{ClientInfo, extract_client_info};

pub fn routes() -> Router {
    Router::new().route("/", get(client_info))
}

pub async fn client_info(headers: HeaderMap) -> Json<ClientInfo> {
    Json(extract_client_info(&headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn reports_forwarded_address_and_agent() {
        let response = routes()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-forwarded-for", "198.51.100.4, 10.0.0.1")
                    .header("user-agent", "curl/8.5.0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"ip": "198.51.100.4", "userAgent": "curl/8.5.0"}));
    }
}
