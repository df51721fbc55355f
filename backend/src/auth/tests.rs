use super::test_support::{TEST_SECRET, sign_token};
use super::*;
use axum::http::HeaderValue;

const USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

#[test]
fn test_validate_supabase_jwt_success() {
    let user_id = Uuid::parse_str(USER_ID).unwrap();
    let token = sign_token(user_id, TEST_SECRET, 9_999_999_999);

    let claims = validate_supabase_jwt(&token, TEST_SECRET).expect("Valid token should pass");
    assert_eq!(claims.sub, USER_ID);
    assert_eq!(claims.email.as_deref(), Some("athlete@example.com"));
    assert_eq!(claims.role, "authenticated");
}

#[test]
fn test_validate_supabase_jwt_expired() {
    let user_id = Uuid::parse_str(USER_ID).unwrap();
    let token = sign_token(user_id, TEST_SECRET, 1);

    assert!(validate_supabase_jwt(&token, TEST_SECRET).is_err());
}

#[test]
fn test_validate_supabase_jwt_invalid_signature() {
    let user_id = Uuid::parse_str(USER_ID).unwrap();
    let token = sign_token(user_id, "wrongsecret", 9_999_999_999);

    assert!(validate_supabase_jwt(&token, TEST_SECRET).is_err());
}

#[test]
fn test_bearer_token_parsing() {
    let mut headers = HeaderMap::new();
    assert!(bearer_token(&headers).is_none());

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert!(bearer_token(&headers).is_none());

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
    assert!(bearer_token(&headers).is_none());

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
    assert_eq!(bearer_token(&headers), Some("abc.def"));
}

#[test]
fn test_secrets_match() {
    assert!(secrets_match("cron-secret", "cron-secret"));
    assert!(!secrets_match("cron-secreT", "cron-secret"));
    assert!(!secrets_match("short", "cron-secret"));
}
