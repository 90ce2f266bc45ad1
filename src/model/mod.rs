//! Cable record value types.
//!
//! [`CableRecord`] is the normalized shape used everywhere inside the crate;
//! the external API's flat schema lives in [`crate::mapping`].

pub mod criteria;
pub mod display;
pub mod field;
pub mod lenient;
pub mod record;


pub use criteria::SearchCriteria;
pub use display::{CableSummary, NOT_AVAILABLE, Property, UNKNOWN};
pub use field::{CableField, UnknownFieldError};
pub use record::CableRecord;
