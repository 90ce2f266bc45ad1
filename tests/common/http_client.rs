//! HTTP client helpers for tests.

use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const STATUS_HEADER: &str = "x-fibersheet-status";

pub struct TestResponse {
    pub status: u16,
    pub fibersheet_status: String,
    pub body: Value,
}

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<TestResponse> {
        let resp = self.client.get(self.url(path)).send().await?;
        Self::read(resp).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Result<TestResponse> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Self::read(resp).await
    }

    async fn read(resp: reqwest::Response) -> reqwest::Result<TestResponse> {
        let status = resp.status().as_u16();
        let fibersheet_status = resp
            .headers()
            .get(STATUS_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let body = resp.json().await?;

        Ok(TestResponse {
            status,
            fibersheet_status,
            body,
        })
    }
}
