use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::model::CableField;
use crate::search::RESULT_KEY;

use super::error::LookupError;

/// Query parameter naming the requested field on the lookup endpoint.
pub const PARAMETER_QUERY_KEY: &str = "parameterName";

/// Keys tried, in order, when a lookup entry is an object.
const VALUE_KEYS: [&str; 3] = ["value", "parameterValue", "name"];

/// Source of valid values for a filterable field.
pub trait ParameterSource: Send + Sync {
    fn fetch_values(
        &self,
        field: CableField,
    ) -> impl std::future::Future<Output = Result<Vec<String>, LookupError>> + Send;
}

#[derive(Debug, Clone)]
/// Fetches values from the external master-data endpoint.
pub struct HttpParameterSource {
    client: reqwest::Client,
    url: String,
}

impl HttpParameterSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, config.parameter_url.clone())
    }
}

impl ParameterSource for HttpParameterSource {
    async fn fetch_values(&self, field: CableField) -> Result<Vec<String>, LookupError> {
        debug!(url = %self.url, field = %field, "Fetching parameter values");

        let response = self
            .client
            .get(&self.url)
            .query(&[(PARAMETER_QUERY_KEY, field.external_key())])
            .send()
            .await
            .map_err(|e| LookupError::Network {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                url: self.url.clone(),
                field,
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LookupError::MalformedResponse {
                field,
                reason: e.to_string(),
            })?;

        parse_values(field, body)
    }
}

/// Reads a lookup body: `{"res": [...]}` or a bare array.
///
/// Entries may be strings, numbers, or objects carrying `value`,
/// `parameterValue` or `name`. Entries of any other shape are skipped.
pub fn parse_values(field: CableField, body: Value) -> Result<Vec<String>, LookupError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove(RESULT_KEY) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(LookupError::MalformedResponse {
                    field,
                    reason: format!("missing '{RESULT_KEY}' array"),
                });
            }
        },
        _ => {
            return Err(LookupError::MalformedResponse {
                field,
                reason: "body is neither an object nor an array".to_string(),
            });
        }
    };

    Ok(normalize_values(items.iter().filter_map(entry_text)))
}

fn entry_text(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(object) => VALUE_KEYS
            .iter()
            .find_map(|key| object.get(*key))
            .and_then(entry_text),
        _ => None,
    }
}

/// Trims, drops blanks and removes duplicates (first occurrence wins).
pub fn normalize_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.as_ref().trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[derive(Debug, Clone, Copy, Default)]
/// Built-in value lists, used when the lookup endpoint is unavailable.
pub struct StaticParameterSource;

impl StaticParameterSource {
    pub fn values(&self, field: CableField) -> Vec<String> {
        let values: &[&str] = match field {
            CableField::FiberCount => &[
                "2F", "4F", "6F", "8F", "12F", "24F", "48F", "96F", "144F", "288F",
            ],
            CableField::TypeOfCable => &["UT", "MT"],
            CableField::FiberType => &["G.652D", "G.657A1", "G.657A2", "OM1", "OM3", "OM4"],
            CableField::NescCondition => &["Light", "Medium", "Heavy"],
            CableField::TubeColorCoding => &["TIA-598", "N/A"],
            _ => &[],
        };
        values.iter().map(|v| v.to_string()).collect()
    }
}

impl ParameterSource for StaticParameterSource {
    async fn fetch_values(&self, field: CableField) -> Result<Vec<String>, LookupError> {
        Ok(self.values(field))
    }
}
