use serde::{Deserialize, Serialize};

use super::field::CableField;
use super::lenient;

/// Normalized representation of one cable variant.
///
/// Text attributes are optional; `None` and `Some("")` are both treated as
/// "absent" by [`CableRecord::get`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CableRecord {
    /// Server-assigned identifier. `None` means new/unassigned.
    #[serde(
        alias = "cableID",
        deserialize_with = "lenient::deserialize_cable_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub cable_id: Option<i64>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub cable_description: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub fiber_count: Option<String>,
    #[serde(
        alias = "typeofCable",
        deserialize_with = "lenient::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_of_cable: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub tube: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub tube_color_coding: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub fiber_type: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub diameter: Option<String>,
    #[serde(
        alias = "tensile",
        deserialize_with = "lenient::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tensile_strength: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub nesc_condition: Option<String>,
    #[serde(
        alias = "crush",
        deserialize_with = "lenient::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub crush_resistance: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_text", skip_serializing_if = "Option::is_none")]
    pub blowing_length: Option<String>,
    #[serde(
        alias = "datasheetURL",
        deserialize_with = "lenient::deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub datasheet_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize_active_flag")]
    pub is_active: bool,
}

impl Default for CableRecord {
    fn default() -> Self {
        Self {
            cable_id: None,
            cable_description: None,
            fiber_count: None,
            type_of_cable: None,
            span: None,
            tube: None,
            tube_color_coding: None,
            fiber_type: None,
            diameter: None,
            tensile_strength: None,
            nesc_condition: None,
            crush_resistance: None,
            blowing_length: None,
            datasheet_url: None,
            is_active: true,
        }
    }
}

impl CableRecord {
    /// Creates an empty, active record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a text field.
    pub fn with(mut self, field: CableField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder-style setter for the identifier.
    pub fn with_id(mut self, cable_id: i64) -> Self {
        self.cable_id = Some(cable_id);
        self
    }

    /// Builder-style setter for the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Returns the value of `field`, or `None` when unset or empty.
    pub fn get(&self, field: CableField) -> Option<&str> {
        self.slot(field).as_deref().filter(|v| !v.is_empty())
    }

    /// Returns the value of `field`, or `""` when unset.
    pub fn get_or_empty(&self, field: CableField) -> &str {
        self.get(field).unwrap_or("")
    }

    pub(crate) fn set(&mut self, field: CableField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    fn slot(&self, field: CableField) -> &Option<String> {
        match field {
            CableField::CableDescription => &self.cable_description,
            CableField::FiberCount => &self.fiber_count,
            CableField::TypeOfCable => &self.type_of_cable,
            CableField::Span => &self.span,
            CableField::Tube => &self.tube,
            CableField::TubeColorCoding => &self.tube_color_coding,
            CableField::FiberType => &self.fiber_type,
            CableField::Diameter => &self.diameter,
            CableField::TensileStrength => &self.tensile_strength,
            CableField::NescCondition => &self.nesc_condition,
            CableField::CrushResistance => &self.crush_resistance,
            CableField::BlowingLength => &self.blowing_length,
            CableField::DatasheetUrl => &self.datasheet_url,
        }
    }

    fn slot_mut(&mut self, field: CableField) -> &mut Option<String> {
        match field {
            CableField::CableDescription => &mut self.cable_description,
            CableField::FiberCount => &mut self.fiber_count,
            CableField::TypeOfCable => &mut self.type_of_cable,
            CableField::Span => &mut self.span,
            CableField::Tube => &mut self.tube,
            CableField::TubeColorCoding => &mut self.tube_color_coding,
            CableField::FiberType => &mut self.fiber_type,
            CableField::Diameter => &mut self.diameter,
            CableField::TensileStrength => &mut self.tensile_strength,
            CableField::NescCondition => &mut self.nesc_condition,
            CableField::CrushResistance => &mut self.crush_resistance,
            CableField::BlowingLength => &mut self.blowing_length,
            CableField::DatasheetUrl => &mut self.datasheet_url,
        }
    }

    /// Description used in logs and reports (`"Unknown"` when unset).
    pub fn description(&self) -> &str {
        self.get(CableField::CableDescription).unwrap_or("Unknown")
    }
}
