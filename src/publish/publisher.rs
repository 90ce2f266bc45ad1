use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::mapping::to_external_schema;
use crate::model::CableRecord;

use super::error::PublishError;
use super::types::{PublishReport, PublishResult};

/// Fallback decline message when the body carries none.
const DECLINED_WITHOUT_MESSAGE: &str = "no message";

/// Posts records to the external configure endpoint.
#[derive(Debug, Clone)]
pub struct DatasheetPublisher {
    client: reqwest::Client,
    url: String,
    delay: Duration,
}

impl DatasheetPublisher {
    pub fn new(client: reqwest::Client, url: impl Into<String>, delay: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            delay,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, config.configure_url.clone(), config.publish_delay)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Posts one record in the external schema.
    pub async fn publish(&self, record: &CableRecord) -> PublishResult {
        let description = record.description().to_string();
        let outcome = self.post(record).await;

        match &outcome {
            Ok(_) => debug!(description = %description, "Record published"),
            Err(error) => warn!(description = %description, error = %error, "Record not published"),
        }

        PublishResult {
            description,
            outcome,
        }
    }

    /// Publishes `records` one at a time, pausing between requests.
    ///
    /// A failed record is reported and the batch moves on.
    pub async fn publish_all(&self, records: &[CableRecord]) -> PublishReport {
        let started = Instant::now();
        let mut results = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            results.push(self.publish(record).await);
        }

        let report = PublishReport::from_results(results, started.elapsed().as_secs_f64());
        info!(
            total = report.total,
            succeeded = report.succeeded,
            failed = report.failed,
            "Batch publish complete"
        );
        report
    }

    async fn post(&self, record: &CableRecord) -> Result<Value, PublishError> {
        let payload = to_external_schema(record);

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PublishError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| PublishError::Network {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        interpret_response(&body)
    }
}

/// Reads a 2xx body. Only an object with `"success": false` is a failure.
///
/// Empty bodies become `Value::Null` and non-JSON text is kept as a string.
pub fn interpret_response(body: &str) -> Result<Value, PublishError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => return Ok(Value::String(body.to_string())),
    };

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = ["message", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .unwrap_or(DECLINED_WITHOUT_MESSAGE)
            .to_string();
        return Err(PublishError::Declined { message });
    }

    Ok(value)
}
