//! # torque - Closure Torque CLI
//!
//! Command-line front end for `torque_core`.
//!
//! ```text
//! torque calc 38 --unit nm --trace
//! torque table --table-set extended
//! torque neck 24 --table-set vendor
//! torque convert 10 --unit kgfcm
//! ```
//!
//! Defaults come from `--config <PATH>` (or `TORQUE_CONFIG`), else
//! `./torque.toml` when present, else built-in values.

mod cli;
mod config;
mod error;
mod render;

use std::process::ExitCode;

use clap::Parser;
use torque_core::calculations::find_neck_match;
use torque_core::{CalculationContext, ExportPayload, RawValues, TorqueEngine, TorqueUnit};

use cli::{CalcArgs, Cli, Commands, ConvertArgs, NeckArgs, TableArgs};
use config::Settings;
use error::{CliError, CliResult};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.command.wants_json();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if json {
                if let Ok(body) = error_json(&e) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", body);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut settings = config::load(cli.global.config.as_deref())?;
    if let Some(set) = cli.global.table_set {
        settings.table_set = set;
    }

    match cli.command {
        Commands::Calc(args) => run_calc(&settings, args),
        Commands::Table(args) => run_table(&settings, args),
        Commands::Neck(args) => run_neck(&settings, args),
        Commands::Convert(args) => run_convert(args),
    }
}

fn run_calc(settings: &Settings, args: CalcArgs) -> CliResult<()> {
    let ctx = CalculationContext::new(args.diameter)
        .with_mode(args.mode.unwrap_or(settings.mode))
        .with_unit(args.unit.unwrap_or(settings.unit))
        .with_removal_percent(args.removal.unwrap_or(settings.removal_percent));

    let engine = TorqueEngine::new(settings.table_set);
    let result = engine.calculate_checked(&ctx)?;

    match (args.json, args.trace) {
        (true, true) => println!("{}", result.to_json_pretty()?),
        (true, false) => println!("{}", ExportPayload::from_result(&ctx, &result).to_json_pretty()?),
        (false, show_trace) => {
            println!("{}", render::calculation(&ctx, settings.table_set, &result, show_trace));
            if show_trace {
                let raw = RawValues::from_result(&ctx, &result).to_json_pretty()?;
                println!("{}", render::raw_values(&raw));
            }
        }
    }
    Ok(())
}

fn run_table(settings: &Settings, args: TableArgs) -> CliResult<()> {
    let unit = args.unit.unwrap_or(settings.unit);
    println!(
        "{}",
        render::torque_table(settings.table_set, settings.table_set.torque_table(), unit)
    );
    Ok(())
}

fn run_neck(settings: &Settings, args: NeckArgs) -> CliResult<()> {
    let specs = settings.table_set.require_neck_specs()?;
    let matched = find_neck_match(specs, args.diameter)
        .and_then(|m| specs.get(m.size_code).map(|spec| (spec, m)));

    match matched {
        Some((spec, m)) => println!("{}", render::neck_match(args.diameter, spec, &m)),
        None => println!("No neck finish specifications available"),
    }
    Ok(())
}

fn run_convert(args: ConvertArgs) -> CliResult<()> {
    let units = args.unit.map_or(TorqueUnit::ALL.to_vec(), |unit| vec![unit]);
    for unit in units {
        println!("{}", render::conversion(args.value, unit));
    }
    Ok(())
}

fn error_json(e: &CliError) -> serde_json::Result<String> {
    let value = match e.as_calc() {
        Some(calc) => serde_json::json!({
            "code": calc.error_code(),
            "inputError": calc.is_input_error(),
            "error": calc,
        }),
        None => serde_json::json!({
            "code": "CONFIG_ERROR",
            "error": { "type": "ConfigError", "details": { "reason": e.to_string() } },
        }),
    };
    serde_json::to_string_pretty(&value)
}
