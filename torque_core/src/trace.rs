//! # Calculation Trace
//!
//! Builds the human-readable, ordered explanation shown in "debug" mode:
//! which resolution path was taken, the 50% rule arithmetic, the removal
//! arithmetic and, for non-canonical display units, the unit conversion.
//!
//! The trace is narration only. It formats values it is given; it is never
//! parsed back or used as the source of displayed numbers.
//!
//! ## Example Output (39 mm, table mode, 50%, N·m)
//!
//! ```text
//! No table entry found for 39 mm, using 50% rule
//! Step 1: Calculate center value = diameter × 0.5
//!   Center = 39 mm × 0.5 = 19.5 in-lb
//! Step 2: Apply ±20% tolerance band
//!   Min = 19.5 × 0.8 = 15.60 in-lb
//!   Max = 19.5 × 1.2 = 23.40 in-lb
//! Application Range: 15.60 - 23.40 in-lb
//!
//! Removal Calculation:
//! Removal percentage: 50%
//! Removal min = 15.60 × 50% = 7.80 in-lb
//! Removal max = 23.40 × 50% = 11.70 in-lb
//!
//! Unit Conversion (N·m):
//! Conversion factor: 1 in-lb = 0.113 N·m
//! Application min: 15.60 × 0.113 = 1.763 N·m
//! ...
//! ```

use crate::calculations::neck_match::NeckMatch;
use crate::calculations::resolver::{
    rule_center, Resolution, ResolutionMode, RULE_BAND_HIGH, RULE_BAND_LOW, RULE_CENTER_FACTOR,
};
use crate::calculations::torque::{CalculationContext, DisplayValues};
use crate::tables::{NeckSpec, TorqueRange};

/// Build the ordered explanation for one calculation.
pub fn build_trace(
    ctx: &CalculationContext,
    resolution: &Resolution,
    removal: &TorqueRange,
    display: &DisplayValues,
) -> Vec<String> {
    let mut steps = Vec::new();
    let app = resolution.range;
    let d = ctx.diameter_mm;

    if resolution.used_table {
        steps.push(format!("Found exact table entry for {d} mm diameter"));
        steps.push(format!("Table value: {} - {} in-lb", app.min, app.max));
    } else {
        if ctx.mode == ResolutionMode::TableLookup {
            steps.push(format!("No table entry found for {d} mm, using 50% rule"));
        }
        let center = rule_center(f64::from(d));
        steps.push(format!("Step 1: Calculate center value = diameter × {RULE_CENTER_FACTOR}"));
        steps.push(format!("  Center = {d} mm × {RULE_CENTER_FACTOR} = {center} in-lb"));
        steps.push("Step 2: Apply ±20% tolerance band".to_string());
        steps.push(format!("  Min = {center} × {RULE_BAND_LOW} = {:.2} in-lb", app.min));
        steps.push(format!("  Max = {center} × {RULE_BAND_HIGH} = {:.2} in-lb", app.max));
    }

    steps.push(format!("Application Range: {:.2} - {:.2} in-lb", app.min, app.max));

    let pct = ctx.removal_percent;
    steps.push(String::new());
    steps.push("Removal Calculation:".to_string());
    steps.push(format!("Removal percentage: {pct}%"));
    steps.push(format!("Removal min = {:.2} × {pct}% = {:.2} in-lb", app.min, removal.min));
    steps.push(format!("Removal max = {:.2} × {pct}% = {:.2} in-lb", app.max, removal.max));

    let unit = display.unit;
    if !unit.is_canonical() {
        let symbol = unit.symbol();
        let factor = unit.factor();
        let rows = [
            ("Application min", app.min, display.application.min),
            ("Application max", app.max, display.application.max),
            ("Removal min", removal.min, display.removal.min),
            ("Removal max", removal.max, display.removal.max),
        ];

        steps.push(String::new());
        steps.push(format!("Unit Conversion ({symbol}):"));
        steps.push(format!("Conversion factor: 1 in-lb = {factor} {symbol}"));
        for (label, inlb, converted) in rows {
            steps.push(format!("{label}: {inlb:.2} × {factor} = {} {symbol}", display.format(converted)));
        }
    }

    steps
}

/// Lines describing a neck-finish match.
pub fn neck_spec_lines(diameter_mm: i32, spec: &NeckSpec, m: &NeckMatch) -> Vec<String> {
    let (t_lo, t_hi) = spec.t.to_mm();
    let how = if m.contained {
        "within T range"
    } else {
        "nearest T center, outside every T range"
    };
    vec![
        String::new(),
        "Neck Finish Match:".to_string(),
        format!(
            "T = {:.3} - {:.3} in ({t_lo:.2} - {t_hi:.2} mm), center {:.2} mm",
            spec.t.min,
            spec.t.max,
            spec.t_center_mm()
        ),
        format!(
            "{diameter_mm} mm -> {} ({how}, off by {:.2} mm)",
            spec.designation(),
            m.distance_mm
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::torque::TorqueEngine;
    use crate::tables::TableSet;
    use crate::units::TorqueUnit;

    fn trace_for(ctx: CalculationContext, set: TableSet) -> Vec<String> {
        TorqueEngine::new(set).calculate(&ctx).trace
    }

    #[test]
    fn test_table_hit_trace() {
        let steps = trace_for(CalculationContext::new(38), TableSet::Minimal);
        assert_eq!(steps[0], "Found exact table entry for 38 mm diameter");
        assert_eq!(steps[1], "Table value: 17 - 26 in-lb");
        assert_eq!(steps[2], "Application Range: 17.00 - 26.00 in-lb");
        assert_eq!(steps[3], "");
        assert_eq!(steps[4], "Removal Calculation:");
        assert_eq!(steps[5], "Removal percentage: 50%");
        assert_eq!(steps[6], "Removal min = 17.00 × 50% = 8.50 in-lb");
        assert_eq!(steps[7], "Removal max = 26.00 × 50% = 13.00 in-lb");
        assert_eq!(steps.len(), 8);
    }

    #[test]
    fn test_rule_trace() {
        let ctx = CalculationContext::new(38).with_mode(ResolutionMode::FormulaFallback);
        let steps = trace_for(ctx, TableSet::Minimal);
        assert_eq!(steps[0], "Step 1: Calculate center value = diameter × 0.5");
        assert_eq!(steps[1], "  Center = 38 mm × 0.5 = 19 in-lb");
        assert_eq!(steps[2], "Step 2: Apply ±20% tolerance band");
        assert_eq!(steps[3], "  Min = 19 × 0.8 = 15.20 in-lb");
        assert_eq!(steps[4], "  Max = 19 × 1.2 = 22.80 in-lb");
        assert_eq!(steps[5], "Application Range: 15.20 - 22.80 in-lb");
    }

    #[test]
    fn test_fallback_trace() {
        let steps = trace_for(CalculationContext::new(39), TableSet::Minimal);
        assert_eq!(steps[0], "No table entry found for 39 mm, using 50% rule");
        assert_eq!(steps[2], "  Center = 39 mm × 0.5 = 19.5 in-lb");
        assert_eq!(steps[4], "  Min = 19.5 × 0.8 = 15.60 in-lb");
        assert_eq!(steps[5], "  Max = 19.5 × 1.2 = 23.40 in-lb");
    }

    #[test]
    fn test_conversion_section_only_for_other_units() {
        let inlb = trace_for(CalculationContext::new(38), TableSet::Minimal);
        assert!(!inlb.iter().any(|l| l.starts_with("Unit Conversion")));

        let ctx = CalculationContext::new(38).with_unit(TorqueUnit::NewtonMeter);
        let nm = trace_for(ctx, TableSet::Minimal);
        let start = nm.iter().position(|l| l == "Unit Conversion (N·m):").unwrap();
        assert_eq!(nm[start - 1], "");
        assert_eq!(nm[start + 1], "Conversion factor: 1 in-lb = 0.113 N·m");
        assert_eq!(nm[start + 2], "Application min: 17.00 × 0.113 = 1.921 N·m");
        assert_eq!(nm[start + 3], "Application max: 26.00 × 0.113 = 2.938 N·m");
        assert!(nm[start + 4].starts_with("Removal min: 8.50 × 0.113 = "));
        assert_eq!(nm[start + 5], "Removal max: 13.00 × 0.113 = 1.469 N·m");
        assert_eq!(nm.len(), start + 6);
    }

    #[test]
    fn test_kgfcm_conversion_uses_one_decimal() {
        let ctx = CalculationContext::new(38).with_unit(TorqueUnit::KgfCm);
        let steps = trace_for(ctx, TableSet::Minimal);
        assert!(steps.contains(&"Conversion factor: 1 in-lb = 1.1521 kgf·cm".to_string()));
        assert!(steps.contains(&"Application max: 26.00 × 1.1521 = 30.0 kgf·cm".to_string()));
    }

    #[test]
    fn test_neck_lines_appended() {
        let steps = trace_for(CalculationContext::new(24), TableSet::VendorExtended);
        let start = steps.iter().position(|l| l == "Neck Finish Match:").unwrap();
        assert!(steps[start + 1].starts_with("T = 0.924 - 0.940 in (23.47 - 23.88 mm)"));
        assert!(steps[start + 2].starts_with("24 mm -> 24-400 (nearest T center"));
    }

    #[test]
    fn test_trace_matches_displayed_values() {
        let ctx = CalculationContext::new(63).with_unit(TorqueUnit::NewtonMeter).with_removal_percent(40.0);
        let result = TorqueEngine::new(TableSet::Extended).calculate(&ctx);
        let app_max = result.display.format(result.display.application.max);
        assert!(result.trace.iter().any(|l| l.ends_with(&format!("= {app_max} N·m"))));
    }
}
