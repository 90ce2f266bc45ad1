//! Tolerant readers for loosely typed JSON values.
//!
//! The external API and older clients send numbers where text is expected,
//! `"Y"`/`"N"` for booleans and ids as strings. These helpers never fail;
//! values they cannot interpret read as unset.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifier of a record the external API has not assigned yet.
pub const UNASSIGNED_CABLE_ID: i64 = 0;

/// Flag value marking an inactive record.
pub const INACTIVE_FLAG: &str = "N";

/// Strings kept as-is, numbers and booleans rendered as text.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integer or numeric string. [`UNASSIGNED_CABLE_ID`] reads as `None`.
pub fn cable_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    id.filter(|id| *id != UNASSIGNED_CABLE_ID)
}

/// Only `false`, `"N"` and `"false"` mark a record inactive.
pub fn active_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let s = s.trim();
            !(s.eq_ignore_ascii_case(INACTIVE_FLAG) || s.eq_ignore_ascii_case("false"))
        }
        _ => true,
    }
}

pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(&Value::deserialize(deserializer)?))
}

pub(crate) fn deserialize_cable_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(cable_id(&Value::deserialize(deserializer)?))
}

pub(crate) fn deserialize_active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(active_flag(&Value::deserialize(deserializer)?))
}
