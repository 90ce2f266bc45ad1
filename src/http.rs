//! Shared `reqwest` client for the external API.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::Config;

/// User agent sent on every external request.
pub const USER_AGENT: &str = concat!("fibersheet/", env!("CARGO_PKG_VERSION"));

/// Builds the pooled client used by search, lookup and publishing.
///
/// Adds `Authorization: Bearer <key>` when an API key is configured.
pub fn build_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = &config.api_key {
        match HeaderValue::from_str(&format!("Bearer {key}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => tracing::warn!("API key contains invalid header characters; not sent"),
        }
    }

    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(config.request_timeout)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
}
