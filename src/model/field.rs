use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One text attribute of a cable variant.
///
/// Every field has two spellings: the normalized name used inside this crate
/// (`typeOfCable`, `tensileStrength`, ...) and the key the external API expects
/// (`typeofCable`, `tensile`, ...). Deserialization and [`FromStr`] accept both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CableField {
    CableDescription,
    FiberCount,
    #[serde(alias = "typeofCable")]
    TypeOfCable,
    Span,
    Tube,
    TubeColorCoding,
    FiberType,
    Diameter,
    #[serde(alias = "tensile")]
    TensileStrength,
    NescCondition,
    #[serde(alias = "crush")]
    CrushResistance,
    BlowingLength,
    #[serde(alias = "datasheetURL")]
    DatasheetUrl,
}

impl CableField {
    /// All text fields, in external schema order.
    pub const ALL: [CableField; 13] = [
        CableField::CableDescription,
        CableField::FiberCount,
        CableField::TypeOfCable,
        CableField::Span,
        CableField::Tube,
        CableField::TubeColorCoding,
        CableField::FiberType,
        CableField::Diameter,
        CableField::TensileStrength,
        CableField::NescCondition,
        CableField::CrushResistance,
        CableField::BlowingLength,
        CableField::DatasheetUrl,
    ];

    /// Fields that take part in accuracy scoring and offer filter values.
    pub const SCOREABLE: [CableField; 7] = [
        CableField::FiberCount,
        CableField::TypeOfCable,
        CableField::FiberType,
        CableField::NescCondition,
        CableField::Diameter,
        CableField::TensileStrength,
        CableField::TubeColorCoding,
    ];

    /// Normalized (internal) field name.
    pub fn name(self) -> &'static str {
        match self {
            CableField::CableDescription => "cableDescription",
            CableField::FiberCount => "fiberCount",
            CableField::TypeOfCable => "typeOfCable",
            CableField::Span => "span",
            CableField::Tube => "tube",
            CableField::TubeColorCoding => "tubeColorCoding",
            CableField::FiberType => "fiberType",
            CableField::Diameter => "diameter",
            CableField::TensileStrength => "tensileStrength",
            CableField::NescCondition => "nescCondition",
            CableField::CrushResistance => "crushResistance",
            CableField::BlowingLength => "blowingLength",
            CableField::DatasheetUrl => "datasheetUrl",
        }
    }

    /// Key used by the external API schema.
    pub fn external_key(self) -> &'static str {
        match self {
            CableField::TypeOfCable => "typeofCable",
            CableField::TensileStrength => "tensile",
            CableField::CrushResistance => "crush",
            CableField::DatasheetUrl => "datasheetURL",
            other => other.name(),
        }
    }

    /// Human-readable label for summaries.
    pub fn label(self) -> &'static str {
        match self {
            CableField::CableDescription => "Cable Description",
            CableField::FiberCount => "Fiber Count",
            CableField::TypeOfCable => "Cable Type",
            CableField::Span => "Span",
            CableField::Tube => "Tube Type",
            CableField::TubeColorCoding => "Tube Color Coding",
            CableField::FiberType => "Fiber Type",
            CableField::Diameter => "Diameter",
            CableField::TensileStrength => "Tensile Strength",
            CableField::NescCondition => "NESC Condition",
            CableField::CrushResistance => "Crush Resistance",
            CableField::BlowingLength => "Blowing Length",
            CableField::DatasheetUrl => "Datasheet URL",
        }
    }

    /// Returns `true` for the fields listed in [`CableField::SCOREABLE`].
    pub fn is_scoreable(self) -> bool {
        Self::SCOREABLE.contains(&self)
    }
}

impl fmt::Display for CableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known cable field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cable field: {name}")]
pub struct UnknownFieldError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for CableField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s || field.external_key() == s)
            .ok_or_else(|| UnknownFieldError {
                name: s.to_string(),
            })
    }
}
