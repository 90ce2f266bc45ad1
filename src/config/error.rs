//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A numeric setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A boolean setting was not one of the accepted spellings.
    #[error("invalid boolean {name}='{value}': expected true/false, yes/no, on/off or 1/0")]
    InvalidBool { name: &'static str, value: String },

    /// An endpoint URL is not http(s).
    #[error("invalid URL {name}='{value}': must start with http:// or https://")]
    InvalidUrl { name: &'static str, value: String },

    /// Request timeout must be positive.
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}
