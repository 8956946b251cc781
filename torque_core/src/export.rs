//! # Result Export
//!
//! Structured text for the "copy results" action. The payload carries the
//! canonical in-lb ranges together with the display-unit token, so the data
//! stays exact regardless of which unit the user was looking at.
//!
//! ```json
//! {
//!   "diameter": 38,
//!   "applicationRange": { "min": 17.0, "max": 26.0 },
//!   "removalRange": { "min": 8.5, "max": 13.0 },
//!   "unit": "N·m",
//!   "mode": "table"
//! }
//! ```
//!
//! [`RawValues`] is the smaller in-lb snapshot printed under a calculation
//! trace.

use serde::{Deserialize, Serialize};

use crate::calculations::resolver::ResolutionMode;
use crate::calculations::torque::{CalculationContext, CalculationResult};
use crate::errors::CalcResult;
use crate::tables::TorqueRange;
use crate::units::TorqueUnit;

/// "Copy as data" payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Cap diameter (mm)
    pub diameter: i32,
    /// Application range (in-lb)
    pub application_range: TorqueRange,
    /// Removal range (in-lb)
    pub removal_range: TorqueRange,
    /// Display unit selected when the result was produced
    pub unit: TorqueUnit,
    /// Resolution mode requested
    pub mode: ResolutionMode,
}

impl ExportPayload {
    pub fn from_result(ctx: &CalculationContext, result: &CalculationResult) -> Self {
        Self {
            diameter: ctx.diameter_mm,
            application_range: result.application_range,
            removal_range: result.removal_range,
            unit: ctx.display_unit,
            mode: ctx.mode,
        }
    }

    /// Pretty-printed JSON, as placed on the clipboard
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Canonical inputs and outputs of one calculation, all in in-lb.
///
/// ```json
/// {
///   "diameter": 38,
///   "appRangeInLb": { "min": 17.0, "max": 26.0 },
///   "removalInLb": { "min": 8.5, "max": 13.0 },
///   "removalPct": 50.0,
///   "units": "inlb"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValues {
    pub diameter: i32,
    pub app_range_in_lb: TorqueRange,
    pub removal_in_lb: TorqueRange,
    pub removal_pct: f64,
    pub units: TorqueUnit,
}

impl RawValues {
    pub fn from_result(ctx: &CalculationContext, result: &CalculationResult) -> Self {
        Self {
            diameter: ctx.diameter_mm,
            app_range_in_lb: result.application_range,
            removal_in_lb: result.removal_range,
            removal_pct: ctx.removal_percent,
            units: ctx.display_unit,
        }
    }

    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::torque::TorqueEngine;
    use crate::tables::TableSet;

    #[test]
    fn test_payload_shape() {
        let ctx = CalculationContext::new(38).with_unit(TorqueUnit::NewtonMeter);
        let result = TorqueEngine::new(TableSet::Minimal).calculate(&ctx);
        let payload = ExportPayload::from_result(&ctx, &result);

        let value: serde_json::Value = serde_json::from_str(&payload.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["diameter"], 38);
        assert_eq!(value["applicationRange"]["min"], 17.0);
        assert_eq!(value["applicationRange"]["max"], 26.0);
        assert_eq!(value["removalRange"]["min"], 8.5);
        assert_eq!(value["removalRange"]["max"], 13.0);
        assert_eq!(value["unit"], "N·m");
        assert_eq!(value["mode"], "table");
        assert_eq!(value.as_object().map(|o| o.len()), Some(5));
    }

    #[test]
    fn test_payload_keeps_canonical_values() {
        let ctx = CalculationContext::new(39)
            .with_mode(ResolutionMode::FormulaFallback)
            .with_unit(TorqueUnit::KgfCm);
        let result = TorqueEngine::default().calculate(&ctx);
        let payload = ExportPayload::from_result(&ctx, &result);
        assert_eq!(payload.application_range, result.application_range);
        assert_eq!(payload.mode, ResolutionMode::FormulaFallback);
        assert!(payload.to_json_pretty().unwrap().contains("\"mode\": \"rule\""));
    }

    #[test]
    fn test_raw_values_shape() {
        let ctx = CalculationContext::new(39).with_removal_percent(40.0);
        let result = TorqueEngine::new(TableSet::Minimal).calculate(&ctx);
        let raw = RawValues::from_result(&ctx, &result);

        let value: serde_json::Value = serde_json::from_str(&raw.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["diameter"], 39);
        assert_eq!(value["appRangeInLb"]["min"], result.application_range.min);
        assert_eq!(value["removalInLb"]["max"], result.removal_range.max);
        assert_eq!(value["removalPct"], 40.0);
        assert_eq!(value["units"], "inlb");
        assert_eq!(value.as_object().map(|o| o.len()), Some(5));
    }
}
