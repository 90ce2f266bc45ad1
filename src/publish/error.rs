use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why a single record was not stored by the configure endpoint.
pub enum PublishError {
    /// The request never got an answer (connect, timeout, TLS, ...).
    #[error("failed to reach configure endpoint: {message}")]
    Network {
        /// Error message.
        message: String,
    },

    /// Non-success HTTP status.
    #[error("configure endpoint returned status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// 2xx response whose body reported `"success": false`.
    #[error("configure endpoint declined the record: {message}")]
    Declined {
        /// Message taken from the response body.
        message: String,
    },
}
