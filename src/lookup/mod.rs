//! Valid-value lookup for filterable fields.
//!
//! The external master-data endpoint lists the values offered for each field
//! (fiber counts, fiber types, ...). [`FilterConfiguration`] holds the
//! autocomplete state for all fields in one map, and falls back to
//! [`StaticParameterSource`] whenever a lookup fails.

pub mod cache;
pub mod error;
pub mod filters;
pub mod source;


pub use cache::CachedParameterSource;
pub use error::LookupError;
pub use filters::{FieldOptions, FilterConfiguration};
pub use source::{
    HttpParameterSource, PARAMETER_QUERY_KEY, ParameterSource, StaticParameterSource,
    normalize_values, parse_values,
};
