//! # Closure Torque Calculation
//!
//! Runs the full resolution for one request: application range, removal
//! range, display conversion, neck-finish match and the explanation trace.
//!
//! Every call recomputes from scratch. The only shared data are the static
//! tables, which are read-only.
//!
//! ## Example
//!
//! ```rust
//! use torque_core::calculations::torque::{CalculationContext, TorqueEngine};
//! use torque_core::calculations::resolver::ResolutionMode;
//! use torque_core::tables::TableSet;
//! use torque_core::units::TorqueUnit;
//!
//! let engine = TorqueEngine::new(TableSet::Minimal);
//! let ctx = CalculationContext::new(38)
//!     .with_mode(ResolutionMode::TableLookup)
//!     .with_removal_percent(50.0)
//!     .with_unit(TorqueUnit::NewtonMeter);
//!
//! let result = engine.calculate(&ctx);
//! assert!(result.used_table_entry);
//! assert_eq!(result.application_range.min, 17.0);
//! assert_eq!(result.removal_range.max, 13.0);
//! assert_eq!(result.display.application_text(), "1.921 - 2.938 N·m");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::neck_match::{find_neck_match, NeckMatch};
use crate::calculations::removal::{
    estimate_removal, DEFAULT_REMOVAL_PERCENT, MAX_REMOVAL_PERCENT, MIN_REMOVAL_PERCENT,
};
use crate::calculations::resolver::{resolve_application_range, ResolutionMode};
use crate::errors::{CalcError, CalcResult};
use crate::tables::{NeckSpec, NeckSpecTable, TableSet, TorqueRange, TorqueTable};
use crate::trace;
use crate::units::TorqueUnit;

/// Smallest diameter accepted by [`CalculationContext::validate`] (mm)
pub const MIN_DIAMETER_MM: i32 = 8;

/// Largest diameter accepted by [`CalculationContext::validate`] (mm)
pub const MAX_DIAMETER_MM: i32 = 130;

/// Default diameter offered to users (mm)
pub const DEFAULT_DIAMETER_MM: i32 = 38;

/// Inputs for one resolution request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter_mm": 38,
///   "mode": "table",
///   "removal_percent": 50.0,
///   "display_unit": "N·m"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationContext {
    /// Nominal cap diameter in mm
    pub diameter_mm: i32,
    /// Table lookup or 50% rule
    pub mode: ResolutionMode,
    /// Removal torque as a percentage of application torque
    pub removal_percent: f64,
    /// Unit used for displayed values
    pub display_unit: TorqueUnit,
}

impl CalculationContext {
    /// Context with default mode (table), 50% removal and in-lb display
    pub fn new(diameter_mm: i32) -> Self {
        Self {
            diameter_mm,
            mode: ResolutionMode::TableLookup,
            removal_percent: DEFAULT_REMOVAL_PERCENT,
            display_unit: TorqueUnit::InLb,
        }
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_removal_percent(mut self, removal_percent: f64) -> Self {
        self.removal_percent = removal_percent;
        self
    }

    pub fn with_unit(mut self, unit: TorqueUnit) -> Self {
        self.display_unit = unit;
        self
    }

    /// Check the inputs against the documented domain.
    ///
    /// The engine does not require this: out-of-domain input still produces
    /// a (meaningless) result. Callers that want strict input use this or
    /// [`TorqueEngine::calculate_checked`].
    pub fn validate(&self) -> CalcResult<()> {
        if self.diameter_mm <= 0 {
            return Err(CalcError::invalid_diameter(
                f64::from(self.diameter_mm),
                "Diameter must be positive",
            ));
        }
        if !(MIN_DIAMETER_MM..=MAX_DIAMETER_MM).contains(&self.diameter_mm) {
            return Err(CalcError::invalid_diameter(
                f64::from(self.diameter_mm),
                format!("Diameter must be between {MIN_DIAMETER_MM} and {MAX_DIAMETER_MM} mm"),
            ));
        }
        if !self.removal_percent.is_finite()
            || !(MIN_REMOVAL_PERCENT..=MAX_REMOVAL_PERCENT).contains(&self.removal_percent)
        {
            return Err(CalcError::invalid_percent(
                self.removal_percent,
                format!("Removal percent must be between {MIN_REMOVAL_PERCENT} and {MAX_REMOVAL_PERCENT}"),
            ));
        }
        Ok(())
    }
}

impl Default for CalculationContext {
    fn default() -> Self {
        CalculationContext::new(DEFAULT_DIAMETER_MM)
    }
}

/// Which path produced the application range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Exact table entry
    TableLookup,
    /// 50% rule requested
    Rule,
    /// Table requested, no entry, 50% rule used
    RuleFallback,
}

impl CalculationMethod {
    fn from_resolution(mode: ResolutionMode, used_table: bool) -> Self {
        match (used_table, mode) {
            (true, _) => CalculationMethod::TableLookup,
            (false, ResolutionMode::FormulaFallback) => CalculationMethod::Rule,
            (false, ResolutionMode::TableLookup) => CalculationMethod::RuleFallback,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationMethod::TableLookup => "Table Lookup",
            CalculationMethod::Rule => "50% Rule",
            CalculationMethod::RuleFallback => "50% Rule (fallback)",
        }
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Application and removal ranges converted to the display unit.
///
/// Derived from the canonical in-lb ranges; never fed back into them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayValues {
    pub unit: TorqueUnit,
    pub application: TorqueRange,
    pub removal: TorqueRange,
}

impl DisplayValues {
    /// Convert canonical ranges for display
    pub fn from_canonical(application: TorqueRange, removal: TorqueRange, unit: TorqueUnit) -> Self {
        Self {
            unit,
            application: application.scaled(unit.factor()),
            removal: removal.scaled(unit.factor()),
        }
    }

    /// Format an already-converted value with the unit's precision
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.unit.display_digits(), value)
    }

    /// e.g. "17.0 - 26.0 in-lb"
    pub fn application_text(&self) -> String {
        self.range_text(self.application)
    }

    /// e.g. "8.5 - 13.0 in-lb"
    pub fn removal_text(&self) -> String {
        self.range_text(self.removal)
    }

    fn range_text(&self, range: TorqueRange) -> String {
        format!("{} - {} {}", self.format(range.min), self.format(range.max), self.unit.symbol())
    }
}

/// Results of one resolution request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "application_range": { "min": 17.0, "max": 26.0 },
///   "removal_range": { "min": 8.5, "max": 13.0 },
///   "used_table_entry": true,
///   "method": "TableLookup",
///   "matched_neck_spec": null,
///   "neck_match": null,
///   "display": { "unit": "inlb", "application": { "min": 17.0, "max": 26.0 }, "removal": { "min": 8.5, "max": 13.0 } },
///   "trace": ["Found exact table entry for 38 mm diameter", "..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Application torque range (in-lb)
    pub application_range: TorqueRange,
    /// Removal torque range (in-lb)
    pub removal_range: TorqueRange,
    /// True when the application range came from an exact table entry
    pub used_table_entry: bool,
    /// Resolution path taken
    pub method: CalculationMethod,
    /// Matched neck finish, when the table set has neck specifications
    pub matched_neck_spec: Option<NeckSpec>,
    /// How the neck finish was matched
    pub neck_match: Option<NeckMatch>,
    /// Ranges converted to the display unit
    pub display: DisplayValues,
    /// Ordered explanation of the calculation
    pub trace: Vec<String>,
}

impl CalculationResult {
    /// Application range formatted in the display unit, e.g. "17.0 - 26.0 in-lb"
    pub fn application_text(&self) -> String {
        self.display.application_text()
    }

    /// Removal range formatted in the display unit
    pub fn removal_text(&self) -> String {
        self.display.removal_text()
    }

    /// Full result as pretty-printed JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolution engine bound to one torque table and an optional neck table.
#[derive(Debug, Clone, Copy)]
pub struct TorqueEngine<'a> {
    torque_table: &'a TorqueTable,
    neck_specs: Option<&'a NeckSpecTable>,
}

impl TorqueEngine<'static> {
    /// Engine over one of the built-in table sets
    pub fn new(table_set: TableSet) -> Self {
        Self {
            torque_table: table_set.torque_table(),
            neck_specs: table_set.neck_specs(),
        }
    }
}

impl Default for TorqueEngine<'static> {
    fn default() -> Self {
        TorqueEngine::new(TableSet::default())
    }
}

impl<'a> TorqueEngine<'a> {
    /// Engine over caller-supplied tables
    pub fn with_tables(torque_table: &'a TorqueTable, neck_specs: Option<&'a NeckSpecTable>) -> Self {
        Self {
            torque_table,
            neck_specs,
        }
    }

    /// Active torque table
    pub fn torque_table(&self) -> &'a TorqueTable {
        self.torque_table
    }

    /// Active neck-finish table
    pub fn neck_specs(&self) -> Option<&'a NeckSpecTable> {
        self.neck_specs
    }

    /// Resolve a request. Total: never fails, never validates.
    pub fn calculate(&self, ctx: &CalculationContext) -> CalculationResult {
        let resolution = resolve_application_range(self.torque_table, ctx.diameter_mm, ctx.mode);
        let removal_range = estimate_removal(resolution.range, ctx.removal_percent);
        let display = DisplayValues::from_canonical(resolution.range, removal_range, ctx.display_unit);

        let matched = self.neck_specs.and_then(|table| {
            find_neck_match(table, f64::from(ctx.diameter_mm))
                .and_then(|m| table.get(m.size_code).map(|spec| (*spec, m)))
        });

        let mut trace_lines = trace::build_trace(ctx, &resolution, &removal_range, &display);
        if let Some((spec, m)) = &matched {
            trace_lines.extend(trace::neck_spec_lines(ctx.diameter_mm, spec, m));
        }

        CalculationResult {
            application_range: resolution.range,
            removal_range,
            used_table_entry: resolution.used_table,
            method: CalculationMethod::from_resolution(ctx.mode, resolution.used_table),
            matched_neck_spec: matched.map(|(spec, _)| spec),
            neck_match: matched.map(|(_, m)| m),
            display,
            trace: trace_lines,
        }
    }

    /// Validate the context, then resolve it.
    pub fn calculate_checked(&self, ctx: &CalculationContext) -> CalcResult<CalculationResult> {
        ctx.validate()?;
        Ok(self.calculate(ctx))
    }
}
