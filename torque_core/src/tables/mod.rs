//! # Reference Tables
//!
//! Static lookup data for the engine. Every table is an immutable, key-ordered
//! value built once on first access and shared for the process lifetime.
//!
//! ## Table Sets
//!
//! Several source revisions of the torque chart exist. A [`TableSet`] picks
//! one authoritative version (plus its neck-finish table, when it has one)
//! so the engine can be exercised against each version independently.
//!
//! ```rust
//! use torque_core::tables::TableSet;
//!
//! let set = TableSet::Extended;
//! assert!(set.torque_table().contains(120));
//! assert!(set.neck_specs().is_none());
//! assert!(TableSet::VendorExtended.neck_specs().is_some());
//! ```

pub mod neck_finish;
pub mod torque;

pub use neck_finish::{DimRange, NeckSpec, NeckSpecTable};
pub use torque::{TorqueRange, TorqueTable};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

static MINIMAL: Lazy<TorqueTable> = Lazy::new(|| TorqueTable::from_static(torque::MINIMAL_ROWS));
static EXTENDED: Lazy<TorqueTable> = Lazy::new(|| TorqueTable::from_static(torque::EXTENDED_ROWS));
static VENDOR: Lazy<TorqueTable> = Lazy::new(|| TorqueTable::from_static(torque::VENDOR_ROWS));
static SPI_400: Lazy<NeckSpecTable> = Lazy::new(neck_finish::spi_400);

/// Selectable table version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableSet {
    /// Ten common sizes
    #[default]
    Minimal,
    /// Full industry chart, 18-120 mm
    Extended,
    /// Vendor chart with SPI 400 neck finishes
    #[serde(rename = "vendor")]
    VendorExtended,
}

impl TableSet {
    /// All table sets
    pub const ALL: [TableSet; 3] = [TableSet::Minimal, TableSet::Extended, TableSet::VendorExtended];

    /// The set's application torque table
    pub fn torque_table(&self) -> &'static TorqueTable {
        match self {
            TableSet::Minimal => Lazy::force(&MINIMAL),
            TableSet::Extended => Lazy::force(&EXTENDED),
            TableSet::VendorExtended => Lazy::force(&VENDOR),
        }
    }

    /// The set's neck-finish table, if it carries one
    pub fn neck_specs(&self) -> Option<&'static NeckSpecTable> {
        match self {
            TableSet::VendorExtended => Some(Lazy::force(&SPI_400)),
            TableSet::Minimal | TableSet::Extended => None,
        }
    }

    /// Neck-finish table or a `NeckSpecUnavailable` error
    pub fn require_neck_specs(&self) -> CalcResult<&'static NeckSpecTable> {
        self.neck_specs()
            .ok_or_else(|| CalcError::neck_spec_unavailable(self.name()))
    }

    /// Short name used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            TableSet::Minimal => "minimal",
            TableSet::Extended => "extended",
            TableSet::VendorExtended => "vendor",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TableSet::Minimal => "Common sizes (Reliable Caps / industry)",
            TableSet::Extended => "Extended industry chart",
            TableSet::VendorExtended => "Vendor chart with SPI 400 neck finishes",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "minimal" | "min" | "common" => Ok(TableSet::Minimal),
            "extended" | "ext" | "industry" => Ok(TableSet::Extended),
            "vendor" | "vendor-extended" | "spi" => Ok(TableSet::VendorExtended),
            _ => Err(CalcError::unknown_table_set(s)),
        }
    }
}

impl std::fmt::Display for TableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TableSet {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableSet::from_str_flexible(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_tables_are_shared() {
        let a = TableSet::Minimal.torque_table() as *const TorqueTable;
        let b = TableSet::Minimal.torque_table() as *const TorqueTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(TableSet::Minimal.torque_table().len(), 10);
        assert_eq!(TableSet::Extended.torque_table().len(), 20);
        assert_eq!(TableSet::VendorExtended.torque_table().len(), 23);
        assert_eq!(TableSet::VendorExtended.neck_specs().map(|t| t.len()), Some(25));
    }

    #[test]
    fn test_require_neck_specs() {
        let err = TableSet::Minimal.require_neck_specs().unwrap_err();
        assert_eq!(err.error_code(), "NECK_SPEC_UNAVAILABLE");
        assert!(TableSet::VendorExtended.require_neck_specs().is_ok());
    }

    #[test]
    fn test_parse_and_serialize() {
        for set in TableSet::ALL {
            assert_eq!(TableSet::from_str_flexible(set.name()).unwrap(), set);
            let json = serde_json::to_string(&set).unwrap();
            assert_eq!(json, format!("\"{}\"", set.name()));
        }
        assert_eq!(TableSet::from_str_flexible("Vendor Extended").unwrap(), TableSet::VendorExtended);
        assert!(TableSet::from_str_flexible("legacy").is_err());
    }
}
