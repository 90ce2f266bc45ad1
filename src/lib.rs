//! Fibersheet library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Records and mapping
//! - [`CableField`], [`CableRecord`], [`SearchCriteria`] - Normalized cable data
//! - [`to_external_schema`], [`from_external`] - Conversion to and from the external API schema
//! - [`CableSummary`] - Labelled display view of a record
//!
//! ## Search
//! - [`SearchOrchestrator`] over a [`SearchBackend`] ([`HttpSearchBackend`] in production)
//! - [`AccuracyScorer`], [`AccuracyAnnotation`] - Per-field match scoring
//!
//! ## Filter options
//! - [`FilterConfiguration`] - Autocomplete state for every filterable field
//! - [`HttpParameterSource`], [`CachedParameterSource`], [`StaticParameterSource`]
//!
//! ## Publishing
//! - [`DatasheetPublisher`], [`PublishReport`] - Sequential upload to the configure endpoint
//!
//! ## Test/Mock Support
//! [`MockSearchBackend`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod gateway;
pub mod http;
pub mod lookup;
pub mod mapping;
pub mod model;
pub mod publish;
pub mod scoring;
pub mod search;

pub use config::{Config, ConfigError};
pub use http::build_client;
pub use lookup::{
    CachedParameterSource, FieldOptions, FilterConfiguration, HttpParameterSource, LookupError,
    ParameterSource, StaticParameterSource,
};
pub use mapping::{ExternalPayload, criteria_to_external, from_external, to_external_schema};
pub use model::{CableField, CableRecord, CableSummary, SearchCriteria, UnknownFieldError};
pub use publish::{DatasheetPublisher, PublishError, PublishReport, PublishResult};
pub use scoring::{AccuracyAnnotation, AccuracyScorer, AnnotatedRecord, FieldMatch, score};
#[cfg(any(test, feature = "mock"))]
pub use search::MockSearchBackend;
pub use search::{HttpSearchBackend, SearchBackend, SearchError, SearchOrchestrator, SearchOutcome};
