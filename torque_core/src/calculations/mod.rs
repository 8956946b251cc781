//! # Torque Calculations
//!
//! The resolution pipeline, leaf first:
//!
//! - [`resolver`] - Application range from the table or the 50% rule
//! - [`removal`] - Removal range as a percentage of application torque
//! - [`neck_match`] - Nearest SPI neck finish for a diameter
//! - [`torque`] - One full request: context in, result out
//!
//! Everything here is a pure function of its inputs and the static tables.
//! Inputs and outputs are JSON-serializable.

pub mod neck_match;
pub mod removal;
pub mod resolver;
pub mod torque;

// Re-export commonly used types
pub use neck_match::{find_neck_match, match_neck_spec, NeckMatch};
pub use removal::estimate_removal;
pub use resolver::{resolve_application_range, Resolution, ResolutionMode};
pub use torque::{CalculationContext, CalculationMethod, CalculationResult, DisplayValues, TorqueEngine};
