//! # torque_core - Closure Torque Resolution Engine
//!
//! `torque_core` turns a bottle-cap diameter into application and removal
//! torque ranges. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable static tables
//! - **Total**: The engine never rejects input; validation is opt-in
//! - **Canonical unit**: Everything is computed in in-lb, other units are display only
//! - **Selectable data**: A [`TableSet`] picks the chart revision at construction time
//!
//! ## Quick Start
//!
//! ```rust
//! use torque_core::{CalculationContext, TableSet, TorqueEngine, TorqueUnit};
//!
//! let engine = TorqueEngine::new(TableSet::Minimal);
//! let result = engine.calculate(&CalculationContext::new(28).with_unit(TorqueUnit::NewtonMeter));
//!
//! assert!(result.used_table_entry);
//! println!("Apply:  {}", result.application_text());
//! println!("Remove: {}", result.removal_text());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Resolver, removal estimate, neck matching, full request
//! - [`tables`] - Torque tables and SPI neck-finish specifications
//! - [`units`] - Torque/length units and display formatting
//! - [`trace`] - Step-by-step explanation of a calculation
//! - [`export`] - "Copy as data" payload
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod export;
pub mod tables;
pub mod trace;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    CalculationContext, CalculationMethod, CalculationResult, ResolutionMode, TorqueEngine,
};
pub use errors::{CalcError, CalcResult};
pub use export::{ExportPayload, RawValues};
pub use tables::{NeckSpec, TableSet, TorqueRange};
pub use units::{convert, format_torque, TorqueUnit};
