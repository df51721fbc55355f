use axum::http::{HeaderMap, header::USER_AGENT};
use recruit_core::domain::value_objects::compliance::ClientContext;
use serde::Serialize;

pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub ip: String,
    pub user_agent: String,
}

/// Reads the caller's address and user agent as forwarded by the edge proxy.
pub fn extract_client_info(headers: &HeaderMap) -> ClientInfo {
    let forwarded_for = header_str(headers, "x-forwarded-for")
        .and_then(|value| value.split(',').map(str::trim).find(|ip| !ip.is_empty()));

    let ip = forwarded_for
        .or_else(|| header_str(headers, "x-real-ip"))
        .unwrap_or(UNKNOWN)
        .to_string();

    let user_agent = header_str(headers, USER_AGENT.as_str())
        .unwrap_or(UNKNOWN)
        .to_string();

    ClientInfo { ip, user_agent }
}

impl From<ClientInfo> for ClientContext {
    fn from(value: ClientInfo) -> Self {
        let known = |v: String| (v != UNKNOWN).then_some(v);
        Self {
            ip_address: known(value.ip),
            user_agent: known(value.user_agent),
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn prefers_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));

        let info = extract_client_info(&headers);
        assert_eq!(info.ip, "203.0.113.7");
        assert_eq!(info.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn falls_back_to_real_ip_then_unknown() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(extract_client_info(&headers).ip, "198.51.100.4");

        let info = extract_client_info(&HeaderMap::new());
        assert_eq!(info.ip, UNKNOWN);
        assert_eq!(info.user_agent, UNKNOWN);
    }

    #[test]
    fn unknown_values_are_not_recorded() {
        let context = ClientContext::from(extract_client_info(&HeaderMap::new()));
        assert_eq!(context, ClientContext::default());
    }
}
