//! CLI argument definitions using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use torque_core::{ResolutionMode, TableSet, TorqueUnit};

#[derive(Parser, Debug)]
#[command(name = "torque")]
#[command(author, version, about = "Closure torque calculator")]
#[command(long_about = "Application and removal torque ranges for threaded bottle caps, \
from the industry torque chart or the 50% rule of thumb.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// TOML file with default settings (default: ./torque.toml if present)
    #[arg(long, global = true, env = "TORQUE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Torque chart revision: minimal, extended or vendor
    #[arg(long, short = 't', global = true)]
    pub table_set: Option<TableSet>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Application and removal torque for a cap diameter
    Calc(CalcArgs),

    /// Print the active torque table
    Table(TableArgs),

    /// Match a cap diameter to an SPI 400 neck finish
    Neck(NeckArgs),

    /// Convert an in-lb value to another unit
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Cap diameter in mm
    #[arg(allow_negative_numbers = true)]
    pub diameter: i32,

    /// Resolution mode: table (chart with rule fallback) or rule
    #[arg(long, short = 'm')]
    pub mode: Option<ResolutionMode>,

    /// Display unit: inlb, nm or kgfcm
    #[arg(long, short = 'u')]
    pub unit: Option<TorqueUnit>,

    /// Removal torque as a percentage of application torque (30-70)
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub removal: Option<f64>,

    /// Show the step-by-step calculation
    #[arg(long)]
    pub trace: bool,

    /// Print the export payload as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Display unit: inlb, nm or kgfcm
    #[arg(long, short = 'u')]
    pub unit: Option<TorqueUnit>,
}

#[derive(Args, Debug)]
pub struct NeckArgs {
    /// Cap diameter in mm
    #[arg(allow_negative_numbers = true)]
    pub diameter: f64,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Torque value in in-lb
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Target unit: inlb, nm or kgfcm (default: every unit)
    #[arg(long, short = 'u')]
    pub unit: Option<TorqueUnit>,
}

impl Commands {
    /// True when errors should also be reported as JSON
    pub fn wants_json(&self) -> bool {
        match self {
            Commands::Calc(args) => args.json,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from([
            "torque", "calc", "38", "--unit", "nm", "--mode", "rule", "--removal", "40", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.diameter, 38);
                assert_eq!(args.unit, Some(TorqueUnit::NewtonMeter));
                assert_eq!(args.mode, Some(ResolutionMode::FormulaFallback));
                assert_eq!(args.removal, Some(40.0));
                assert!(args.json);
                assert!(!args.trace);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_table_set_after_subcommand() {
        let cli = Cli::try_parse_from(["torque", "neck", "24", "--table-set", "vendor"]).unwrap();
        assert_eq!(cli.global.table_set, Some(TableSet::VendorExtended));
    }

    #[test]
    fn test_rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["torque", "convert", "10", "--unit", "psi"]).is_err());
    }

    #[test]
    fn test_negative_diameter_parses() {
        let cli = Cli::try_parse_from(["torque", "calc", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Calc(CalcArgs { diameter: -5, .. })));
    }
}
