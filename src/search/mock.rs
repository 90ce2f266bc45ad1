use serde_json::Value;
use std::sync::Mutex;

use crate::mapping::ExternalPayload;

use super::backend::SearchBackend;
use super::error::SearchError;

/// In-memory search backend for tests.
///
/// Returns a canned response and records every payload it receives.
#[derive(Debug)]
pub struct MockSearchBackend {
    response: Result<Vec<Value>, SearchError>,
    requests: Mutex<Vec<ExternalPayload>>,
}

impl MockSearchBackend {
    /// Backend that answers every search with `candidates`.
    pub fn with_results(candidates: Vec<Value>) -> Self {
        Self {
            response: Ok(candidates),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Backend that fails every search with `error`.
    pub fn failing(error: SearchError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Backend that fails with a network error.
    pub fn unreachable() -> Self {
        Self::failing(SearchError::Network {
            url: "mock://search".to_string(),
            message: "connection refused".to_string(),
        })
    }

    /// Payloads received so far.
    pub fn requests(&self) -> Vec<ExternalPayload> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl SearchBackend for MockSearchBackend {
    async fn search(&self, payload: &ExternalPayload) -> Result<Vec<Value>, SearchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(payload.clone());
        }
        self.response.clone()
    }
}
