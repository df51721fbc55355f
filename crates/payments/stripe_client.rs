use anyhow::Result;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::error;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Minimal Stripe client built on reqwest.
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorDetails,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetails {
    #[serde(rename = "type")]
    type_: Option<String>,
    code: Option<String>,
    message: Option<String>,
    param: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BillingPortalSession {
    pub id: String,
    pub url: String,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self::with_api_base(secret_key, STRIPE_API_BASE.to_string())
    }

    /// Points the client at a different API host (stripe-mock, proxies).
    pub fn with_api_base(secret_key: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn ensure_success(
        resp: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let request_id = resp
            .headers()
            .get("request-id")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (stripe_error_type, stripe_error_code, stripe_error_param, stripe_error_message) =
            match serde_json::from_str::<StripeErrorEnvelope>(&body) {
                Ok(envelope) => {
                    let details = envelope.error;
                    (details.type_, details.code, details.param, details.message)
                }
                Err(_) => (None, None, None, None),
            };

        error!(
            status = %status,
            stripe_request_id = ?request_id,
            stripe_error_type = ?stripe_error_type,
            stripe_error_code = ?stripe_error_code,
            stripe_error_param = ?stripe_error_param,
            stripe_error_message = ?stripe_error_message,
            context = %context,
            "stripe api request failed"
        );

        anyhow::bail!(
            "Stripe API request failed: {} (status {}, request_id={:?})",
            context,
            status,
            request_id
        );
    }

    /// Creates a customer billing portal session and returns it.
    pub async fn create_billing_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<BillingPortalSession> {
        // https://stripe.com/docs/api/customer_portal/sessions/create
        let body = [
            ("customer", customer_id.to_string()),
            ("return_url", return_url.to_string()),
        ];

        let resp = self
            .http
            .post(format!("{}/billing_portal/sessions", self.api_base))
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(&body)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "create billing portal session").await?;

        let session: BillingPortalSession = resp.json().await?;
        Ok(session)
    }
}
