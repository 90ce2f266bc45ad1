use crate::scoring::{AccuracyScorer, AnnotatedRecord};

use super::error::SearchError;

/// Message shown when a search could not be completed.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Message shown when a search completed without results.
pub const NO_MATCHES_MESSAGE: &str = "No matching cables found.";

#[derive(Debug, Clone, PartialEq)]
/// Outcome of one search.
///
/// A zero-result search ([`SearchOutcome::NoMatches`]) is not an error; only
/// [`SearchOutcome::Failed`] signals that the search itself did not complete.
pub enum SearchOutcome {
    /// Annotated candidates in the order the endpoint returned them.
    Matched(Vec<AnnotatedRecord>),
    /// The search completed with no candidates.
    NoMatches,
    /// The endpoint was unreachable or returned an unusable body.
    Failed(SearchError),
}

impl SearchOutcome {
    /// Annotated results (empty unless [`SearchOutcome::Matched`]).
    pub fn results(&self) -> &[AnnotatedRecord] {
        match self {
            SearchOutcome::Matched(results) => results,
            SearchOutcome::NoMatches | SearchOutcome::Failed(_) => &[],
        }
    }

    /// Consumes the outcome, returning the results.
    pub fn into_results(self) -> Vec<AnnotatedRecord> {
        match self {
            SearchOutcome::Matched(results) => results,
            SearchOutcome::NoMatches | SearchOutcome::Failed(_) => Vec::new(),
        }
    }

    /// Results sorted by overall score, highest first.
    pub fn ranked(&self) -> Vec<AnnotatedRecord> {
        AccuracyScorer::rank(self.results().to_vec())
    }

    /// Returns `true` if the search did not complete.
    pub fn is_failed(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&SearchError> {
        match self {
            SearchOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Short status label.
    pub fn status(&self) -> &'static str {
        match self {
            SearchOutcome::Matched(_) => "MATCHED",
            SearchOutcome::NoMatches => "NO_MATCHES",
            SearchOutcome::Failed(_) => "SEARCH_FAILED",
        }
    }

    /// Message suitable for showing to a user.
    pub fn user_message(&self) -> String {
        match self {
            SearchOutcome::Matched(results) => {
                format!("Found {} matching cable(s).", results.len())
            }
            SearchOutcome::NoMatches => NO_MATCHES_MESSAGE.to_string(),
            SearchOutcome::Failed(_) => SEARCH_FAILED_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Matched(results) => write!(f, "MATCHED ({} results)", results.len()),
            SearchOutcome::NoMatches => write!(f, "NO_MATCHES"),
            SearchOutcome::Failed(error) => write!(f, "SEARCH_FAILED ({error})"),
        }
    }
}
