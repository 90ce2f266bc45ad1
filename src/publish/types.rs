use serde::Serialize;
use serde_json::Value;

use super::error::PublishError;

#[derive(Debug, Clone, PartialEq)]
/// Outcome of publishing one record.
pub struct PublishResult {
    /// Description of the record (`Unknown` when unset).
    pub description: String,
    /// Parsed response body on success.
    pub outcome: Result<Value, PublishError>,
}

impl PublishResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&PublishError> {
        self.outcome.as_ref().err()
    }
}

impl Serialize for PublishResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PublishResult", 3)?;
        state.serialize_field("cableDescription", &self.description)?;
        state.serialize_field("success", &self.is_success())?;
        match &self.outcome {
            Ok(response) => state.serialize_field("response", response)?,
            Err(error) => state.serialize_field("error", &error.to_string())?,
        }
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Summary of a batch publish.
pub struct PublishReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Percentage of records stored, `0.0` for an empty batch.
    pub success_rate: f64,
    pub elapsed_secs: f64,
    /// Per-record outcomes, in input order.
    pub results: Vec<PublishResult>,
}

impl PublishReport {
    pub(crate) fn from_results(results: Vec<PublishResult>, elapsed_secs: f64) -> Self {
        let total = results.len();
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        let success_rate = if total == 0 {
            0.0
        } else {
            succeeded as f64 * 100.0 / total as f64
        };

        Self {
            total,
            succeeded,
            failed: total - succeeded,
            success_rate,
            elapsed_secs,
            results,
        }
    }

    /// Records that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &PublishError)> + '_ {
        self.results
            .iter()
            .filter_map(|r| r.error().map(|e| (r.description.as_str(), e)))
    }
}
