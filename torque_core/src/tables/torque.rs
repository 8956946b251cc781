//! Application Torque Tables
//!
//! Guideline application-torque ranges for continuous-thread (CT) closures,
//! keyed by nominal cap diameter in millimeters. All values are in-lb.
//!
//! Three versions ship:
//!
//! - **Minimal**: the ten common sizes from the Reliable Caps bulletins
//!   (24, 28, 38 mm) and compiled industry charts.
//! - **Extended**: the full industry chart, 18 mm through 120 mm.
//! - **Vendor**: a closure vendor's chart. Key set and values overlap the
//!   extended chart but are not identical (tighter ranges at 24-38 mm,
//!   extra 13, 15, 40 and 45 mm sizes, no 30 mm).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Torque range in inch-pounds.
///
/// Table ranges always satisfy `0 < min <= max`. Ranges derived by the
/// engine from out-of-domain input may not; see [`TorqueRange::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TorqueRange {
    /// Lower bound (in-lb)
    pub min: f64,
    /// Upper bound (in-lb)
    pub max: f64,
}

impl TorqueRange {
    /// Create a new range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds positive and ordered
    pub fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min <= self.max
    }

    /// Multiply both bounds by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }
}

/// Immutable diameter -> application torque mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TorqueTable {
    entries: BTreeMap<u32, TorqueRange>,
}

impl TorqueTable {
    /// Build a table from `(diameter_mm, min_inlb, max_inlb)` rows.
    ///
    /// Rejects rows with non-positive or inverted bounds and duplicate keys.
    pub fn from_entries(rows: &[(u32, f64, f64)]) -> CalcResult<Self> {
        let mut entries = BTreeMap::new();
        for &(diameter, min, max) in rows {
            let range = TorqueRange::new(min, max);
            if !range.is_valid() {
                return Err(CalcError::invalid_table_entry(
                    diameter,
                    format!("range {min}-{max} in-lb must satisfy 0 < min <= max"),
                ));
            }
            if entries.insert(diameter, range).is_some() {
                return Err(CalcError::invalid_table_entry(diameter, "duplicate diameter"));
            }
        }
        Ok(Self { entries })
    }

    /// Trusted constructor for the built-in literals (checked by tests).
    pub(crate) fn from_static(rows: &[(u32, f64, f64)]) -> Self {
        Self {
            entries: rows
                .iter()
                .map(|&(diameter, min, max)| (diameter, TorqueRange::new(min, max)))
                .collect(),
        }
    }

    /// Exact-key lookup
    pub fn get(&self, diameter_mm: u32) -> Option<TorqueRange> {
        self.entries.get(&diameter_mm).copied()
    }

    /// True if the diameter is an exact key
    pub fn contains(&self, diameter_mm: u32) -> bool {
        self.entries.contains_key(&diameter_mm)
    }

    /// `(diameter, range)` pairs in ascending diameter order
    pub fn iter(&self) -> impl Iterator<Item = (u32, TorqueRange)> + '_ {
        self.entries.iter().map(|(&d, &r)| (d, r))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Table Data (diameter mm, min in-lb, max in-lb)
// ============================================================================

pub(crate) const MINIMAL_ROWS: &[(u32, f64, f64)] = &[
    (24, 10.0, 18.0),
    (28, 12.0, 21.0),
    (38, 17.0, 26.0),
    (43, 17.0, 27.0),
    (48, 19.0, 30.0),
    (53, 21.0, 36.0),
    (63, 25.0, 43.0),
    (70, 28.0, 50.0),
    (89, 40.0, 70.0),
    (110, 45.0, 70.0),
];

pub(crate) const EXTENDED_ROWS: &[(u32, f64, f64)] = &[
    (18, 7.0, 10.0),
    (20, 8.0, 12.0),
    (22, 9.0, 14.0),
    (24, 10.0, 18.0),
    (28, 12.0, 21.0),
    (30, 13.0, 23.0),
    (33, 15.0, 25.0),
    (38, 17.0, 26.0),
    (43, 17.0, 27.0),
    (48, 19.0, 30.0),
    (53, 21.0, 36.0),
    (58, 23.0, 40.0),
    (63, 25.0, 43.0),
    (66, 26.0, 45.0),
    (70, 28.0, 50.0),
    (83, 32.0, 65.0),
    (89, 40.0, 70.0),
    (100, 45.0, 70.0),
    (110, 45.0, 70.0),
    (120, 55.0, 95.0),
];

pub(crate) const VENDOR_ROWS: &[(u32, f64, f64)] = &[
    (13, 5.0, 8.0),
    (15, 5.0, 9.0),
    (18, 7.0, 10.0),
    (20, 8.0, 12.0),
    (22, 9.0, 14.0),
    (24, 11.0, 17.0),
    (28, 12.0, 18.0),
    (33, 15.0, 21.0),
    (38, 17.0, 24.0),
    (40, 17.0, 26.0),
    (43, 17.0, 27.0),
    (45, 17.0, 27.0),
    (48, 19.0, 30.0),
    (53, 21.0, 36.0),
    (58, 23.0, 40.0),
    (63, 25.0, 43.0),
    (66, 26.0, 45.0),
    (70, 28.0, 50.0),
    (83, 32.0, 65.0),
    (89, 40.0, 70.0),
    (100, 45.0, 70.0),
    (110, 45.0, 70.0),
    (120, 55.0, 95.0),
];
