//! # Unit Types
//!
//! Torque and length units used by the engine. Inch-pounds are the canonical
//! torque unit: every table value and every intermediate result is stored in
//! in-lb, and other torque units exist only for display.
//!
//! ## Conversion Factors
//!
//! The display factors are the ones printed on the reference chart and are
//! applied forward only (in-lb to target). They are not exact inverses of
//! each other. There is no N·m to in-lb conversion.
//!
//! - 1 in-lb = 0.113 N·m
//! - 1 in-lb = 1.1521 kgf·cm
//! - 1 in = 25.4 mm (neck-finish dimensions are tabulated in inches)
//!
//! ## Example
//!
//! ```rust
//! use torque_core::units::{convert, format_torque, TorqueUnit};
//!
//! assert_eq!(convert(10.0, TorqueUnit::InLb), 10.0);
//! assert_eq!(format_torque(10.0, TorqueUnit::NewtonMeter), "1.130");
//! assert_eq!(format_torque(10.0, TorqueUnit::KgfCm), "11.5");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// N·m per in-lb
pub const NM_PER_INLB: f64 = 0.113;

/// kgf·cm per in-lb
pub const KGFCM_PER_INLB: f64 = 1.1521;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// Torque Units
// ============================================================================

/// Display unit for torque values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TorqueUnit {
    /// Inch-pounds (canonical)
    #[default]
    #[serde(rename = "inlb")]
    InLb,
    /// Newton-meters
    #[serde(rename = "N·m")]
    NewtonMeter,
    /// Kilogram-force centimeters
    #[serde(rename = "kgf·cm")]
    KgfCm,
}

impl TorqueUnit {
    /// All supported display units
    pub const ALL: [TorqueUnit; 3] = [TorqueUnit::InLb, TorqueUnit::NewtonMeter, TorqueUnit::KgfCm];

    /// Multiplier applied to an in-lb value
    pub fn factor(&self) -> f64 {
        match self {
            TorqueUnit::InLb => 1.0,
            TorqueUnit::NewtonMeter => NM_PER_INLB,
            TorqueUnit::KgfCm => KGFCM_PER_INLB,
        }
    }

    /// Symbol used next to displayed values
    pub fn symbol(&self) -> &'static str {
        match self {
            TorqueUnit::InLb => "in-lb",
            TorqueUnit::NewtonMeter => "N·m",
            TorqueUnit::KgfCm => "kgf·cm",
        }
    }

    /// Token used in exported data (`inlb`, `N·m`, `kgf·cm`)
    pub fn token(&self) -> &'static str {
        match self {
            TorqueUnit::InLb => "inlb",
            TorqueUnit::NewtonMeter => "N·m",
            TorqueUnit::KgfCm => "kgf·cm",
        }
    }

    /// Decimal places used when displaying a value in this unit
    pub fn display_digits(&self) -> usize {
        match self {
            TorqueUnit::NewtonMeter => 3,
            TorqueUnit::InLb | TorqueUnit::KgfCm => 1,
        }
    }

    /// True for the canonical unit (no conversion needed)
    pub fn is_canonical(&self) -> bool {
        matches!(self, TorqueUnit::InLb)
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['·', '.', '-', '_', ' ', '*'], "");
        match normalized.as_str() {
            "inlb" | "lbin" | "inlbs" => Ok(TorqueUnit::InLb),
            "nm" | "newtonmeter" | "newtonmeters" => Ok(TorqueUnit::NewtonMeter),
            "kgfcm" | "kgcm" => Ok(TorqueUnit::KgfCm),
            _ => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl std::fmt::Display for TorqueUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for TorqueUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TorqueUnit::from_str_flexible(s)
    }
}

/// Convert an in-lb value to the target unit. No rounding.
pub fn convert(value_inlb: f64, target: TorqueUnit) -> f64 {
    match target {
        TorqueUnit::InLb => value_inlb,
        other => value_inlb * other.factor(),
    }
}

/// Convert and format an in-lb value with the unit's display precision.
pub fn format_torque(value_inlb: f64, unit: TorqueUnit) -> String {
    format!("{:.*}", unit.display_digits(), convert(value_inlb, unit))
}

/// Inches to millimeters
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert(17.0, TorqueUnit::InLb), 17.0);
        assert_eq!(format_torque(17.0, TorqueUnit::InLb), "17.0");
    }

    #[test]
    fn test_newton_meter_factor() {
        assert!((convert(1.0, TorqueUnit::NewtonMeter) - 0.113).abs() < 1e-12);
        assert_eq!(format_torque(10.0, TorqueUnit::NewtonMeter), "1.130");
    }

    #[test]
    fn test_forward_factor_recovers_input() {
        for x in [0.5, 8.5, 17.0, 26.0, 70.0] {
            let back = convert(x, TorqueUnit::NewtonMeter) / NM_PER_INLB;
            assert!((convert(back, TorqueUnit::InLb) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_kgfcm() {
        assert!((convert(26.0, TorqueUnit::KgfCm) - 29.9546).abs() < 1e-9);
        assert_eq!(format_torque(26.0, TorqueUnit::KgfCm), "30.0");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(TorqueUnit::from_str_flexible("inlb").unwrap(), TorqueUnit::InLb);
        assert_eq!(TorqueUnit::from_str_flexible("in-lb").unwrap(), TorqueUnit::InLb);
        assert_eq!(TorqueUnit::from_str_flexible("N·m").unwrap(), TorqueUnit::NewtonMeter);
        assert_eq!(TorqueUnit::from_str_flexible("nm").unwrap(), TorqueUnit::NewtonMeter);
        assert_eq!(TorqueUnit::from_str_flexible("kgf·cm").unwrap(), TorqueUnit::KgfCm);
        assert_eq!(TorqueUnit::from_str_flexible("KGF-CM").unwrap(), TorqueUnit::KgfCm);
        assert!(TorqueUnit::from_str_flexible("psi").is_err());
    }

    #[test]
    fn test_unit_serialization() {
        let json = serde_json::to_string(&TorqueUnit::NewtonMeter).unwrap();
        assert_eq!(json, "\"N·m\"");
        let roundtrip: TorqueUnit = serde_json::from_str("\"inlb\"").unwrap();
        assert_eq!(roundtrip, TorqueUnit::InLb);
    }

    #[test]
    fn test_inches_to_mm() {
        assert!((inches_to_mm(0.924) - 23.4696).abs() < 1e-9);
        assert_eq!(inches_to_mm(1.0), MM_PER_INCH);
    }
}
