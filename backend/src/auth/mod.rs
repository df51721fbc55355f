use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

/// Shared secret used to verify access tokens, installed as a request extension.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupabaseClaims {
    pub sub: String,
    pub role: String,
    pub email: Option<String>,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug)]
pub struct AuthError(anyhow::Error);

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError(err)
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn validate_supabase_jwt(token: &str, secret: &str) -> Result<SupabaseClaims, AuthError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.set_audience(&["authenticated"]);

    let token_data = decode::<SupabaseClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

/// Returns the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Compares two secrets without short-circuiting on the first mismatch.
pub fn secrets_match(provided: &str, expected: &str) -> bool {
    let (a, b) = (provided.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts.extensions.get::<AuthConfig>().ok_or_else(|| {
            error!("auth: AuthConfig extension is not installed");
            AppError::Internal("Authentication is not configured".to_string())
        })?;

        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;

        let claims = validate_supabase_jwt(token, &config.jwt_secret).map_err(|err| {
            warn!(error = %err, "auth: rejected access token");
            AppError::Unauthorized
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            warn!(sub = %claims.sub, "auth: token subject is not a user id");
            AppError::Unauthorized
        })?;

        Ok(AuthUser {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    pub(crate) const TEST_SECRET: &str = "supersecretjwtsecretforunittesting123";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: String,
        role: &'a str,
        aud: &'a str,
        email: Option<&'a str>,
        exp: usize,
    }

    pub(crate) fn sign_token(user_id: Uuid, secret: &str, exp: usize) -> String {
        encode(
            &Header::default(),
            &TestClaims {
                sub: user_id.to_string(),
                role: "authenticated",
                aud: "authenticated",
                email: Some("athlete@example.com"),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    pub(crate) fn bearer(user_id: Uuid) -> String {
        format!("Bearer {}", sign_token(user_id, TEST_SECRET, 9_999_999_999))
    }

    pub(crate) fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
