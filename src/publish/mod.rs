//! Publishing cable records to the external configure endpoint.
//!
//! Each record is mapped to the external schema and POSTed on its own.
//! Batches run sequentially with a configurable pause between requests, and
//! per-record failures are collected into a [`PublishReport`].

pub mod error;
pub mod publisher;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::PublishError;
pub use publisher::{DatasheetPublisher, interpret_response};
pub use types::{PublishReport, PublishResult};
