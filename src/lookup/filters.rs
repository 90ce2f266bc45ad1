use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::model::{CableField, SearchCriteria};

use super::error::LookupError;
use super::source::{ParameterSource, StaticParameterSource, normalize_values};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Autocomplete state for one field.
pub struct FieldOptions {
    /// Every valid value offered for the field.
    pub all_values: Vec<String>,
    /// Text the user has typed to narrow `all_values`.
    pub current_filter: String,
    /// Value chosen for the search (`""` when none).
    pub selected_value: String,
}

impl FieldOptions {
    /// Values containing the current filter, ignoring case.
    pub fn matching(&self) -> Vec<&str> {
        let filter = self.current_filter.trim().to_lowercase();
        self.all_values
            .iter()
            .map(String::as_str)
            .filter(|value| filter.is_empty() || value.to_lowercase().contains(&filter))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Filter state for every filterable field, keyed by field.
///
/// One set of fetch/filter/select operations serves all fields.
pub struct FilterConfiguration {
    fields: BTreeMap<CableField, FieldOptions>,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self::for_fields(CableField::SCOREABLE)
    }
}

impl FilterConfiguration {
    /// Configuration covering the scoreable fields.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_fields(fields: impl IntoIterator<Item = CableField>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field, FieldOptions::default()))
                .collect(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = CableField> + '_ {
        self.fields.keys().copied()
    }

    pub fn options(&self, field: CableField) -> Option<&FieldOptions> {
        self.fields.get(&field)
    }

    /// Replaces the value list for `field`.
    pub fn load<S: AsRef<str>>(&mut self, field: CableField, values: impl IntoIterator<Item = S>) {
        self.entry(field).all_values = normalize_values(values);
    }

    /// Loads values for `field` from `source`, falling back to the built-in
    /// list when the source fails or returns nothing.
    ///
    /// Returns `true` if `source` supplied the values.
    pub async fn fetch<S: ParameterSource>(
        &mut self,
        field: CableField,
        source: &S,
        fallback: &StaticParameterSource,
    ) -> bool {
        let result = source.fetch_values(field).await;
        self.apply(field, result, fallback)
    }

    /// Fetches every configured field concurrently.
    ///
    /// Returns how many fields were served by `source`.
    pub async fn fetch_all<S: ParameterSource>(
        &mut self,
        source: &S,
        fallback: &StaticParameterSource,
    ) -> usize {
        let fields: Vec<CableField> = self.fields().collect();
        let results = join_all(fields.iter().map(|field| source.fetch_values(*field))).await;

        let mut served = 0;
        for (field, result) in fields.into_iter().zip(results) {
            if self.apply(field, result, fallback) {
                served += 1;
            }
        }
        served
    }

    /// Records the filter text for `field` and returns the matching values.
    pub fn filter(&mut self, field: CableField, text: &str) -> Vec<&str> {
        let options = self.entry(field);
        options.current_filter = text.to_string();
        options.matching()
    }

    pub fn select(&mut self, field: CableField, value: impl Into<String>) {
        self.entry(field).selected_value = value.into();
    }

    /// Clears the filter text and selection for `field` (values stay loaded).
    pub fn clear(&mut self, field: CableField) {
        let options = self.entry(field);
        options.current_filter.clear();
        options.selected_value.clear();
    }

    /// Criteria built from the selected values.
    pub fn to_criteria(&self) -> SearchCriteria {
        self.fields
            .iter()
            .filter(|(_, options)| !options.selected_value.trim().is_empty())
            .map(|(field, options)| (*field, options.selected_value.clone()))
            .collect()
    }

    fn entry(&mut self, field: CableField) -> &mut FieldOptions {
        self.fields.entry(field).or_default()
    }

    fn apply(
        &mut self,
        field: CableField,
        result: Result<Vec<String>, LookupError>,
        fallback: &StaticParameterSource,
    ) -> bool {
        match result {
            Ok(values) if !values.is_empty() => {
                debug!(field = %field, count = values.len(), "Loaded parameter values");
                self.load(field, values);
                true
            }
            Ok(_) => {
                debug!(field = %field, "No parameter values returned, using fallback list");
                self.load(field, fallback.values(field));
                false
            }
            Err(error) => {
                warn!(field = %field, error = %error, "Parameter lookup failed, using fallback list");
                self.load(field, fallback.values(field));
                false
            }
        }
    }
}
