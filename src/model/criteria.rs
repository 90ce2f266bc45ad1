use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::field::CableField;
use super::lenient;
use super::record::CableRecord;

/// User-entered search filters, keyed by field.
///
/// A missing or blank entry means "no constraint" for that field.
///
/// Deserializes from an object keyed by normalized names or external keys.
/// Keys that name no text field (`cableID`, `isActive`, ...) are ignored,
/// `null` reads as `""` and numbers are rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchCriteria {
    values: BTreeMap<CableField, String>,
}

impl SearchCriteria {
    /// Creates criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: CableField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Raw filter value for `field` (`""` when absent).
    pub fn get(&self, field: CableField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Trimmed filter value, or `None` when it does not constrain the search.
    pub fn constraint(&self, field: CableField) -> Option<&str> {
        let value = self.get(field).trim();
        (!value.is_empty()).then_some(value)
    }

    /// Returns `true` when no field carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        CableField::ALL
            .into_iter()
            .all(|field| self.constraint(field).is_none())
    }

    /// Builds the record shape sent to the external search endpoint.
    ///
    /// Constraints are trimmed; unconstrained fields stay unset.
    pub fn to_record(&self) -> CableRecord {
        CableField::ALL
            .into_iter()
            .fold(CableRecord::new(), |record, field| {
                match self.constraint(field) {
                    Some(value) => record.with(field, value),
                    None => record,
                }
            })
    }
}

impl FromIterator<(CableField, String)> for SearchCriteria {
    fn from_iter<I: IntoIterator<Item = (CableField, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for SearchCriteria {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .iter()
            .filter_map(|(key, value)| {
                let field = key.parse::<CableField>().ok()?;
                Some((field, lenient::text(value).unwrap_or_default()))
            })
            .collect())
    }
}
