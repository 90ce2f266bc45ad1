use thiserror::Error;

use crate::model::CableField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned while fetching valid values for a field.
pub enum LookupError {
    /// The lookup endpoint could not be reached.
    #[error("failed to reach parameter endpoint '{url}': {message}")]
    Network { url: String, message: String },

    /// The lookup endpoint answered with a non-success status.
    #[error("parameter endpoint '{url}' returned status {status} for {field}")]
    UnexpectedStatus {
        url: String,
        field: CableField,
        status: u16,
    },

    /// The body did not contain a value list.
    #[error("malformed parameter response for {field}: {reason}")]
    MalformedResponse { field: CableField, reason: String },
}
