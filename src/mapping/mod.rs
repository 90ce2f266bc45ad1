//! Field mapping between [`CableRecord`] and the external API schema.
//!
//! The external API rejects payloads with missing keys, so
//! [`to_external_schema`] always emits the full fixed key set, rendering
//! absent values as `""`. [`from_external`] is the tolerant inverse used when
//! reading API responses: it never fails, and anything it cannot interpret is
//! treated as unset.


use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::lenient;
use crate::model::{CableField, CableRecord, SearchCriteria};

pub use crate::model::lenient::{INACTIVE_FLAG, UNASSIGNED_CABLE_ID};

pub const ACTIVE_FLAG: &str = "Y";

/// Every key of the external schema, in wire order.
pub const EXTERNAL_KEYS: [&str; 15] = [
    "cableID",
    "cableDescription",
    "fiberCount",
    "typeofCable",
    "span",
    "tube",
    "tubeColorCoding",
    "fiberType",
    "diameter",
    "tensile",
    "nescCondition",
    "crush",
    "blowingLength",
    "datasheetURL",
    "isActive",
];

/// Flat request body understood by the external API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalPayload {
    #[serde(rename = "cableID")]
    pub cable_id: i64,
    #[serde(rename = "cableDescription")]
    pub cable_description: String,
    #[serde(rename = "fiberCount")]
    pub fiber_count: String,
    #[serde(rename = "typeofCable")]
    pub type_of_cable: String,
    pub span: String,
    pub tube: String,
    #[serde(rename = "tubeColorCoding")]
    pub tube_color_coding: String,
    #[serde(rename = "fiberType")]
    pub fiber_type: String,
    pub diameter: String,
    pub tensile: String,
    #[serde(rename = "nescCondition")]
    pub nesc_condition: String,
    pub crush: String,
    #[serde(rename = "blowingLength")]
    pub blowing_length: String,
    #[serde(rename = "datasheetURL")]
    pub datasheet_url: String,
    #[serde(rename = "isActive")]
    pub is_active: String,
}

/// Maps a record to the external schema. Total over all inputs.
pub fn to_external_schema(record: &CableRecord) -> ExternalPayload {
    let text = |field: CableField| record.get_or_empty(field).to_string();

    ExternalPayload {
        cable_id: record.cable_id.unwrap_or(UNASSIGNED_CABLE_ID),
        cable_description: text(CableField::CableDescription),
        fiber_count: text(CableField::FiberCount),
        type_of_cable: text(CableField::TypeOfCable),
        span: text(CableField::Span),
        tube: text(CableField::Tube),
        tube_color_coding: text(CableField::TubeColorCoding),
        fiber_type: text(CableField::FiberType),
        diameter: text(CableField::Diameter),
        tensile: text(CableField::TensileStrength),
        nesc_condition: text(CableField::NescCondition),
        crush: text(CableField::CrushResistance),
        blowing_length: text(CableField::BlowingLength),
        datasheet_url: text(CableField::DatasheetUrl),
        is_active: if record.is_active {
            ACTIVE_FLAG
        } else {
            INACTIVE_FLAG
        }
        .to_string(),
    }
}

/// Maps search criteria to the external schema (blank filters become `""`).
pub fn criteria_to_external(criteria: &SearchCriteria) -> ExternalPayload {
    to_external_schema(&criteria.to_record())
}

/// Reads an external-schema object back into a record.
///
/// Strings are kept as-is, numbers and booleans are coerced to strings, and
/// anything else (including a non-object `value`) leaves the field unset.
pub fn from_external(value: &Value) -> CableRecord {
    let Some(object) = value.as_object() else {
        return CableRecord::new();
    };

    let mut record = CableRecord::new();

    for field in CableField::ALL {
        if let Some(text) = object.get(field.external_key()).and_then(lenient::text) {
            record.set(field, text);
        }
    }

    record.cable_id = object.get("cableID").and_then(lenient::cable_id);
    record.is_active = object.get("isActive").is_none_or(lenient::active_flag);
    record
}

impl From<&CableRecord> for ExternalPayload {
    fn from(record: &CableRecord) -> Self {
        to_external_schema(record)
    }
}
