use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by a search backend.
pub enum SearchError {
    /// The endpoint could not be reached (connect, timeout, TLS, ...).
    #[error("failed to reach search endpoint '{url}': {message}")]
    Network {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("search endpoint '{url}' returned status {status}")]
    UnexpectedStatus {
        /// Endpoint URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not JSON or lacked the result array.
    #[error("malformed search response: {reason}")]
    MalformedResponse {
        /// What was wrong with the body.
        reason: String,
    },
}

impl SearchError {
    /// Returns `true` for transport-level failures (network or status).
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SearchError::Network { .. } | SearchError::UnexpectedStatus { .. }
        )
    }
}
