//! # Application Torque Resolver
//!
//! Maps a nominal cap diameter to an application-torque range, either from
//! the active torque table or from the 50% rule.
//!
//! ## The 50% Rule
//!
//! Application torque in in-lb is roughly half the cap diameter in mm, with
//! a ±20% band:
//!
//! ```text
//! center = d × 0.5
//! min    = center × 0.8
//! max    = center × 1.2
//! ```
//!
//! Table lookup is exact-key only. A diameter that is not tabulated falls
//! through to the rule even when it is 1 mm away from a tabulated size; no
//! interpolation is performed.
//!
//! ## Example
//!
//! ```rust
//! use torque_core::calculations::resolver::{resolve_application_range, ResolutionMode};
//! use torque_core::tables::TableSet;
//!
//! let table = TableSet::Minimal.torque_table();
//!
//! let hit = resolve_application_range(table, 38, ResolutionMode::TableLookup);
//! assert!(hit.used_table);
//! assert_eq!((hit.range.min, hit.range.max), (17.0, 26.0));
//!
//! let miss = resolve_application_range(table, 39, ResolutionMode::TableLookup);
//! assert!(!miss.used_table);
//! assert!((miss.range.min - 15.6).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::{TorqueRange, TorqueTable};

/// in-lb of application torque per mm of diameter
pub const RULE_CENTER_FACTOR: f64 = 0.5;

/// Lower band multiplier (-20%)
pub const RULE_BAND_LOW: f64 = 0.8;

/// Upper band multiplier (+20%)
pub const RULE_BAND_HIGH: f64 = 1.2;

/// How the application range should be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResolutionMode {
    /// Use the guideline table when the diameter is tabulated
    #[default]
    #[serde(rename = "table")]
    TableLookup,
    /// Always use the 50% rule
    #[serde(rename = "rule")]
    FormulaFallback,
}

impl ResolutionMode {
    /// Token used on the command line and in exported data
    pub fn token(&self) -> &'static str {
        match self {
            ResolutionMode::TableLookup => "table",
            ResolutionMode::FormulaFallback => "rule",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ResolutionMode::TableLookup => "Use guideline table (if available)",
            ResolutionMode::FormulaFallback => "Use 50 percent rule",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" | "lookup" | "table-lookup" => Ok(ResolutionMode::TableLookup),
            "rule" | "formula" | "50%" | "50-percent" => Ok(ResolutionMode::FormulaFallback),
            _ => Err(CalcError::unknown_mode(s)),
        }
    }
}

impl std::fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for ResolutionMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResolutionMode::from_str_flexible(s)
    }
}

/// Outcome of resolving an application range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Application torque range (in-lb)
    pub range: TorqueRange,
    /// True when the range came from an exact table entry
    pub used_table: bool,
}

/// Center of the 50% rule band (in-lb)
pub fn rule_center(diameter_mm: f64) -> f64 {
    diameter_mm * RULE_CENTER_FACTOR
}

/// 50% rule range for any diameter. Not validated: non-positive diameters
/// give non-positive ranges.
pub fn rule_of_thumb(diameter_mm: f64) -> TorqueRange {
    let center = rule_center(diameter_mm);
    TorqueRange::new(center * RULE_BAND_LOW, center * RULE_BAND_HIGH)
}

/// Resolve the application-torque range for a diameter.
pub fn resolve_application_range(table: &TorqueTable, diameter_mm: i32, mode: ResolutionMode) -> Resolution {
    if mode == ResolutionMode::TableLookup {
        if let Some(range) = u32::try_from(diameter_mm).ok().and_then(|d| table.get(d)) {
            return Resolution {
                range,
                used_table: true,
            };
        }
    }

    Resolution {
        range: rule_of_thumb(f64::from(diameter_mm)),
        used_table: false,
    }
}
