//! Search orchestration against the external datasheet API.

pub mod backend;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod orchestrator;
pub mod types;

#[cfg(test)]
mod tests;

pub use backend::{HttpSearchBackend, SearchBackend, extract_results};
pub use error::SearchError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSearchBackend;
pub use orchestrator::SearchOrchestrator;
pub use types::{NO_MATCHES_MESSAGE, SEARCH_FAILED_MESSAGE, SearchOutcome};

/// Key of the result array in external API responses.
pub const RESULT_KEY: &str = "res";
