use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{CableField, CableRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-field comparison detail.
pub struct FieldMatch {
    /// Trimmed criterion value.
    pub search_value: String,
    /// Candidate value as stored (`""` when absent).
    pub candidate_value: String,
    /// Whether the criterion was found in the candidate value.
    pub is_match: bool,
    /// 100 on match, otherwise 0.
    pub field_score: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of scoring one candidate against a set of criteria.
pub struct AccuracyAnnotation {
    /// Aggregate match percentage (0-100).
    pub overall_score: u8,
    /// Number of fields with a non-blank criterion.
    pub considered_count: usize,
    /// Number of considered fields that matched.
    pub matched_count: usize,
    /// Detail for every considered field.
    pub per_field: BTreeMap<CableField, FieldMatch>,
}

impl AccuracyAnnotation {
    /// Returns `true` if no criterion was supplied.
    pub fn is_unscored(&self) -> bool {
        self.considered_count == 0
    }

    /// Returns `true` if every considered field matched (and at least one was considered).
    pub fn is_full_match(&self) -> bool {
        self.considered_count > 0 && self.matched_count == self.considered_count
    }

    /// Returns the detail for `field`, if it was considered.
    pub fn field(&self, field: CableField) -> Option<&FieldMatch> {
        self.per_field.get(&field)
    }

    /// Fields that matched.
    pub fn matched_fields(&self) -> impl Iterator<Item = CableField> + '_ {
        self.per_field
            .iter()
            .filter(|(_, m)| m.is_match)
            .map(|(field, _)| *field)
    }
}

impl std::fmt::Display for AccuracyAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% ({}/{} fields)",
            self.overall_score, self.matched_count, self.considered_count
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Search result paired with its accuracy annotation.
pub struct AnnotatedRecord {
    /// The candidate as returned by the search endpoint.
    pub record: CableRecord,
    /// Accuracy of the candidate against the search criteria.
    pub accuracy: AccuracyAnnotation,
}

impl AnnotatedRecord {
    pub fn new(record: CableRecord, accuracy: AccuracyAnnotation) -> Self {
        Self { record, accuracy }
    }

    pub fn overall_score(&self) -> u8 {
        self.accuracy.overall_score
    }
}
