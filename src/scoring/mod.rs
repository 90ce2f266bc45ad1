//! Search accuracy scoring.
//!
//! Given [`SearchCriteria`](crate::model::SearchCriteria) and a candidate
//! [`CableRecord`](crate::model::CableRecord), [`AccuracyScorer`] reports which
//! of the scoreable fields matched and an overall percentage.
//!
//! # Matching rules
//!
//! - Only fields with a non-blank criterion are considered; blank criteria
//!   neither help nor penalize the score.
//! - A field matches when the trimmed criterion is a case-insensitive
//!   substring of the candidate value. An absent candidate value never matches.
//! - Each considered field scores 100 or 0; there is no partial credit.
//! - The overall score is `round(100 * matched / considered)`, or 0 when no
//!   field was considered.
//!
//! Scoring never reorders candidates. [`AccuracyScorer::rank`] is provided for
//! callers that want results sorted by score.

pub mod scorer;
pub mod types;


pub use scorer::{AccuracyScorer, score};
pub use types::{AccuracyAnnotation, AnnotatedRecord, FieldMatch};

/// Score given to a matching field.
pub const FIELD_MATCH_SCORE: u8 = 100;

/// Score given to a considered field that did not match.
pub const FIELD_MISS_SCORE: u8 = 0;
