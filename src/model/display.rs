use serde::Serialize;

use super::field::CableField;
use super::record::CableRecord;

/// Placeholder shown for an empty property.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown for empty metadata.
pub const UNKNOWN: &str = "Unknown";

const SUMMARY_FIELDS: [CableField; 9] = [
    CableField::FiberCount,
    CableField::TypeOfCable,
    CableField::Tube,
    CableField::FiberType,
    CableField::Diameter,
    CableField::TensileStrength,
    CableField::CrushResistance,
    CableField::NescCondition,
    CableField::BlowingLength,
];

/// Labelled property shown in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub label: &'static str,
    pub value: String,
}

/// Display view of one cable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CableSummary {
    pub cable_description: String,
    pub fiber_type: String,
    pub source_file: String,
    pub properties: Vec<Property>,
}

impl CableSummary {
    pub fn from_record(record: &CableRecord, source_file: Option<&str>) -> Self {
        let properties = SUMMARY_FIELDS
            .into_iter()
            .map(|field| Property {
                label: field.label(),
                value: record.get(field).unwrap_or(NOT_AVAILABLE).to_string(),
            })
            .collect();

        let source_file = source_file
            .filter(|s| !s.trim().is_empty())
            .or_else(|| record.get(CableField::DatasheetUrl))
            .unwrap_or(UNKNOWN);

        Self {
            cable_description: record.description().to_string(),
            fiber_type: record.get(CableField::FiberType).unwrap_or(UNKNOWN).to_string(),
            source_file: source_file.to_string(),
            properties,
        }
    }

    /// Looks up a property by label.
    pub fn property(&self, label: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.value.as_str())
    }
}
