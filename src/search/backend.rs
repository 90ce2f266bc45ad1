use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::mapping::ExternalPayload;

use super::RESULT_KEY;
use super::error::SearchError;

/// Transport used by the orchestrator to query the external search API.
pub trait SearchBackend: Send + Sync {
    /// Sends `payload` as the query and returns the raw candidate objects,
    /// in the order the endpoint listed them.
    fn search(
        &self,
        payload: &ExternalPayload,
    ) -> impl std::future::Future<Output = Result<Vec<Value>, SearchError>> + Send;
}

#[derive(Debug, Clone)]
/// Search backend that POSTs the payload as JSON.
pub struct HttpSearchBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpSearchBackend {
    /// Creates a backend for `url` using a shared client.
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Creates a backend for the configured search URL.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, config.search_url.clone())
    }

    /// Returns the configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SearchBackend for HttpSearchBackend {
    async fn search(&self, payload: &ExternalPayload) -> Result<Vec<Value>, SearchError> {
        debug!(url = %self.url, "Sending search request");

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SearchError::Network {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| SearchError::Network {
            url: self.url.clone(),
            message: e.to_string(),
        })?;

        let body: Value =
            serde_json::from_slice(&body).map_err(|e| SearchError::MalformedResponse {
                reason: format!("body is not JSON: {e}"),
            })?;

        extract_results(body)
    }
}

/// Pulls the result array out of a search response body.
pub fn extract_results(body: Value) -> Result<Vec<Value>, SearchError> {
    let Value::Object(mut object) = body else {
        return Err(SearchError::MalformedResponse {
            reason: "body is not a JSON object".to_string(),
        });
    };

    match object.remove(RESULT_KEY) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(SearchError::MalformedResponse {
            reason: format!("'{RESULT_KEY}' is not an array"),
        }),
        None => Err(SearchError::MalformedResponse {
            reason: format!("missing '{RESULT_KEY}' array"),
        }),
    }
}
