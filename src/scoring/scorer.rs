use std::collections::BTreeMap;
use tracing::debug;

use crate::model::{CableField, CableRecord, SearchCriteria};

use super::types::{AccuracyAnnotation, AnnotatedRecord, FieldMatch};
use super::{FIELD_MATCH_SCORE, FIELD_MISS_SCORE};

#[derive(Debug, Clone)]
pub struct AccuracyScorer {
    fields: Vec<CableField>,
}

impl Default for AccuracyScorer {
    fn default() -> Self {
        Self {
            fields: CableField::SCOREABLE.to_vec(),
        }
    }
}

impl AccuracyScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[CableField] {
        &self.fields
    }

    pub fn score(&self, criteria: &SearchCriteria, candidate: &CableRecord) -> AccuracyAnnotation {
        let mut per_field = BTreeMap::new();
        let mut matched_count = 0;

        for &field in &self.fields {
            let Some(search_value) = criteria.constraint(field) else {
                continue;
            };

            let candidate_value = candidate.get_or_empty(field);
            let is_match = contains_ignore_case(candidate_value, search_value);
            if is_match {
                matched_count += 1;
            }

            per_field.insert(
                field,
                FieldMatch {
                    search_value: search_value.to_string(),
                    candidate_value: candidate_value.to_string(),
                    is_match,
                    field_score: if is_match {
                        FIELD_MATCH_SCORE
                    } else {
                        FIELD_MISS_SCORE
                    },
                },
            );
        }

        let considered_count = per_field.len();

        AccuracyAnnotation {
            overall_score: percentage(matched_count, considered_count),
            considered_count,
            matched_count,
            per_field,
        }
    }

    /// Scores every candidate, preserving input order.
    pub fn score_candidates(
        &self,
        criteria: &SearchCriteria,
        candidates: Vec<CableRecord>,
    ) -> Vec<AnnotatedRecord> {
        debug!(
            num_candidates = candidates.len(),
            "Scoring search candidates"
        );

        candidates
            .into_iter()
            .map(|record| {
                let accuracy = self.score(criteria, &record);
                AnnotatedRecord::new(record, accuracy)
            })
            .collect()
    }

    /// Sorts by overall score, highest first. Ties keep their original order.
    pub fn rank(mut results: Vec<AnnotatedRecord>) -> Vec<AnnotatedRecord> {
        results.sort_by(|a, b| b.overall_score().cmp(&a.overall_score()));
        results
    }
}

/// Scores `candidate` with the default field set.
pub fn score(criteria: &SearchCriteria, candidate: &CableRecord) -> AccuracyAnnotation {
    AccuracyScorer::default().score(criteria, candidate)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn percentage(matched: usize, considered: usize) -> u8 {
    if considered == 0 {
        return 0;
    }
    ((matched as f64 * 100.0) / considered as f64).round() as u8
}
