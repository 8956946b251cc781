//! Plain-text output for each subcommand.
//!
//! Every function returns the text instead of printing it so the layout can
//! be checked without spawning the binary.

use torque_core::calculations::NeckMatch;
use torque_core::tables::{DimRange, TorqueTable};
use torque_core::{
    format_torque, CalculationContext, CalculationMethod, CalculationResult, NeckSpec, TableSet,
    TorqueUnit,
};

/// Shown when table mode had to fall back to the rule of thumb
pub const FALLBACK_NOTE: &str = "No exact table entry for this diameter. Showing rule of thumb instead.";

pub fn calculation(
    ctx: &CalculationContext,
    table_set: TableSet,
    result: &CalculationResult,
    show_trace: bool,
) -> String {
    let mut lines = vec![
        format!("Cap diameter:       {} mm ({})", ctx.diameter_mm, table_set.display_name()),
        format!("Application torque: {}", result.application_text()),
        format!(
            "Removal torque:     {} ({}% of application)",
            result.removal_text(),
            ctx.removal_percent
        ),
    ];

    if let Some(spec) = &result.matched_neck_spec {
        lines.push(format!("Neck finish:        {}", spec.designation()));
    }

    if result.method == CalculationMethod::RuleFallback {
        lines.push(String::new());
        lines.push(FALLBACK_NOTE.to_string());
    }

    if show_trace {
        lines.push(String::new());
        lines.push(format!("Method Used: {}", result.method.display_name()));
        lines.extend(result.trace.iter().cloned());
    }

    lines.join("\n")
}

pub fn torque_table(table_set: TableSet, table: &TorqueTable, unit: TorqueUnit) -> String {
    let mut lines = vec![
        format!("{} torque chart ({} entries)", table_set.display_name(), table.len()),
        format!("{:>8}  {:>20}", "Diameter", format!("Application ({})", unit.symbol())),
    ];
    for (diameter, range) in table.iter() {
        lines.push(format!(
            "{:>5} mm  {:>20}",
            diameter,
            format!("{} - {}", format_torque(range.min, unit), format_torque(range.max, unit))
        ));
    }
    lines.join("\n")
}

fn dim_line(symbol: &str, dim: &DimRange) -> String {
    let (lo, hi) = dim.to_mm();
    if dim.min == dim.max {
        format!("  {symbol}  min {:.3} in ({lo:.2} mm)", dim.min)
    } else {
        format!("  {symbol}  {:.3} - {:.3} in ({lo:.2} - {hi:.2} mm)", dim.min, dim.max)
    }
}

pub fn neck_match(diameter_mm: f64, spec: &NeckSpec, m: &NeckMatch) -> String {
    let how = if m.contained {
        "within T range"
    } else {
        "nearest T center, outside every T range"
    };
    let mut lines = vec![format!(
        "{diameter_mm} mm -> {} ({how}, off by {:.2} mm)",
        spec.designation(),
        m.distance_mm
    )];

    if let Some(tpi) = spec.threads_per_inch {
        lines.push(format!("  Threads per inch: {tpi}"));
    }
    lines.push(dim_line("T", &spec.t));
    let optional = [("E", spec.e), ("S", spec.s), ("I", spec.i), ("H", spec.h)];
    for (symbol, dim) in optional {
        if let Some(d) = dim {
            lines.push(dim_line(symbol, &d));
        }
    }

    lines.join("\n")
}

/// Block printed under the trace, holding already serialized JSON
pub fn raw_values(json: &str) -> String {
    format!("\nRaw Values (in-lb):\n{json}")
}

pub fn conversion(value_inlb: f64, unit: TorqueUnit) -> String {
    format!("{} {}", format_torque(value_inlb, unit), unit.symbol())
}
