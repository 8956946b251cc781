//! SPI Neck Finish Specifications
//!
//! Dimensional tolerances for SPI 400-style continuous-thread neck finishes,
//! keyed by size code (the nominal diameter in mm). All dimensions are in
//! inches, as published.
//!
//! | Symbol | Dimension |
//! |--------|-----------|
//! | T | Thread outer diameter |
//! | E | Neck outer diameter at the thread root |
//! | S | Thread start offset from the sealing surface |
//! | I | Inner (bore) diameter, minimum only |
//! | H | Neck height (sealing surface to bead) |

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::inches_to_mm;

/// Closed dimensional range in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimRange {
    pub min: f64,
    pub max: f64,
}

impl DimRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A published minimum with no upper tolerance
    pub const fn at_least(min: f64) -> Self {
        Self { min, max: min }
    }

    /// `min <= max`, with both bounds comparable (NaN fails)
    pub fn is_ordered(&self) -> bool {
        matches!(self.min.partial_cmp(&self.max), Some(Ordering::Less | Ordering::Equal))
    }

    /// Midpoint in inches
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Range converted to millimeters as `(min, max)`
    pub fn to_mm(&self) -> (f64, f64) {
        (inches_to_mm(self.min), inches_to_mm(self.max))
    }

    /// Midpoint in millimeters
    pub fn center_mm(&self) -> f64 {
        inches_to_mm(self.center())
    }

    /// True if a millimeter value falls inside the range (inclusive)
    pub fn contains_mm(&self, value_mm: f64) -> bool {
        let (lo, hi) = self.to_mm();
        value_mm >= lo && value_mm <= hi
    }
}

/// A single neck-finish specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeckSpec {
    /// Size code (e.g., 24 for a 24-400 finish)
    pub size_code: u32,
    /// Thread outer diameter (required)
    pub t: DimRange,
    /// Neck outer diameter
    pub e: Option<DimRange>,
    /// Thread start offset
    pub s: Option<DimRange>,
    /// Inner diameter
    pub i: Option<DimRange>,
    /// Neck height
    pub h: Option<DimRange>,
    /// Threads per inch
    pub threads_per_inch: Option<u32>,
}

impl NeckSpec {
    /// Finish designation, e.g. "24-400"
    pub fn designation(&self) -> String {
        format!("{}-400", self.size_code)
    }

    /// T range midpoint in millimeters
    pub fn t_center_mm(&self) -> f64 {
        self.t.center_mm()
    }

    fn check(&self) -> CalcResult<()> {
        let dims = [
            ("T", Some(self.t)),
            ("E", self.e),
            ("S", self.s),
            ("I", self.i),
            ("H", self.h),
        ];
        for (symbol, dim) in dims {
            if let Some(d) = dim {
                if !d.is_ordered() {
                    return Err(CalcError::invalid_table_entry(
                        self.size_code,
                        format!("{symbol} range {}-{} in is inverted or not a number", d.min, d.max),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Immutable neck-finish table in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NeckSpecTable {
    specs: Vec<NeckSpec>,
}

impl NeckSpecTable {
    /// Build a table, rejecting inverted ranges and duplicate size codes.
    pub fn from_specs(specs: Vec<NeckSpec>) -> CalcResult<Self> {
        for (idx, spec) in specs.iter().enumerate() {
            spec.check()?;
            if specs[..idx].iter().any(|s| s.size_code == spec.size_code) {
                return Err(CalcError::invalid_table_entry(spec.size_code, "duplicate size code"));
            }
        }
        Ok(Self { specs })
    }

    /// Lookup by size code
    pub fn get(&self, size_code: u32) -> Option<&NeckSpec> {
        self.specs.iter().find(|s| s.size_code == size_code)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &NeckSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

// ============================================================================
// SPI 400 Data
// ============================================================================

/// (code, T min, T max, E min, E max, S min, S max, I min, H min, H max, TPI)
type Row = (u32, f64, f64, f64, f64, f64, f64, f64, f64, f64, u32);

const SPI_400_ROWS: &[Row] = &[
    (18, 0.681, 0.694, 0.613, 0.623, 0.022, 0.052, 0.325, 0.346, 0.377, 8),
    (20, 0.759, 0.772, 0.691, 0.701, 0.022, 0.052, 0.404, 0.346, 0.377, 8),
    (22, 0.837, 0.850, 0.769, 0.779, 0.022, 0.052, 0.483, 0.346, 0.377, 8),
    (24, 0.924, 0.940, 0.851, 0.867, 0.030, 0.060, 0.516, 0.377, 0.408, 8),
    (28, 1.079, 1.095, 1.006, 1.022, 0.030, 0.060, 0.635, 0.377, 0.408, 6),
    (30, 1.158, 1.174, 1.067, 1.083, 0.030, 0.060, 0.679, 0.377, 0.408, 6),
    (33, 1.259, 1.280, 1.166, 1.187, 0.030, 0.060, 0.769, 0.377, 0.408, 6),
    (35, 1.364, 1.385, 1.271, 1.292, 0.030, 0.060, 0.832, 0.377, 0.408, 6),
    (38, 1.475, 1.496, 1.382, 1.403, 0.030, 0.060, 0.955, 0.377, 0.408, 6),
    (40, 1.563, 1.589, 1.455, 1.481, 0.030, 0.060, 1.035, 0.377, 0.408, 6),
    (43, 1.662, 1.683, 1.559, 1.580, 0.030, 0.060, 1.091, 0.377, 0.408, 6),
    (45, 1.731, 1.757, 1.623, 1.649, 0.030, 0.060, 1.148, 0.377, 0.408, 6),
    (48, 1.845, 1.871, 1.737, 1.763, 0.030, 0.060, 1.258, 0.377, 0.408, 6),
    (53, 2.037, 2.063, 1.929, 1.955, 0.030, 0.060, 1.403, 0.377, 0.408, 6),
    (58, 2.218, 2.250, 2.087, 2.119, 0.030, 0.060, 1.563, 0.409, 0.440, 6),
    (60, 2.297, 2.329, 2.166, 2.198, 0.030, 0.060, 1.649, 0.409, 0.440, 6),
    (63, 2.431, 2.463, 2.300, 2.332, 0.030, 0.060, 1.746, 0.409, 0.440, 6),
    (66, 2.509, 2.541, 2.378, 2.410, 0.030, 0.060, 1.840, 0.409, 0.440, 6),
    (70, 2.695, 2.727, 2.564, 2.596, 0.030, 0.060, 1.938, 0.409, 0.440, 6),
    (75, 2.911, 2.943, 2.780, 2.812, 0.030, 0.060, 2.116, 0.409, 0.440, 6),
    (83, 3.185, 3.217, 3.054, 3.086, 0.030, 0.060, 2.345, 0.409, 0.440, 5),
    (89, 3.418, 3.450, 3.287, 3.319, 0.030, 0.060, 2.577, 0.409, 0.440, 5),
    (100, 3.857, 3.889, 3.726, 3.758, 0.030, 0.060, 2.874, 0.409, 0.440, 5),
    (110, 4.238, 4.270, 4.107, 4.139, 0.030, 0.060, 3.221, 0.440, 0.471, 5),
    (120, 4.648, 4.680, 4.517, 4.549, 0.030, 0.060, 3.592, 0.440, 0.471, 5),
];

/// SPI 400 table from the literal rows above.
pub(crate) fn spi_400() -> NeckSpecTable {
    NeckSpecTable {
        specs: SPI_400_ROWS
            .iter()
            .map(|&(code, t_min, t_max, e_min, e_max, s_min, s_max, i_min, h_min, h_max, tpi)| NeckSpec {
                size_code: code,
                t: DimRange::new(t_min, t_max),
                e: Some(DimRange::new(e_min, e_max)),
                s: Some(DimRange::new(s_min, s_max)),
                i: Some(DimRange::at_least(i_min)),
                h: Some(DimRange::new(h_min, h_max)),
                threads_per_inch: Some(tpi),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spi_rows_are_valid() {
        let table = spi_400();
        let checked = NeckSpecTable::from_specs(table.iter().copied().collect()).unwrap();
        assert_eq!(checked.len(), SPI_400_ROWS.len());
    }

    #[test]
    fn test_spi_rows_ascending_and_disjoint() {
        let table = spi_400();
        let specs: Vec<&NeckSpec> = table.iter().collect();
        for pair in specs.windows(2) {
            assert!(pair[0].size_code < pair[1].size_code);
            assert!(pair[0].t.max < pair[1].t.min);
        }
    }

    #[test]
    fn test_24_400_in_mm() {
        let table = spi_400();
        let spec = table.get(24).unwrap();
        let (lo, hi) = spec.t.to_mm();
        assert!((lo - 23.4696).abs() < 1e-9);
        assert!((hi - 23.876).abs() < 1e-9);
        assert!(!spec.t.contains_mm(24.0));
        assert!(spec.t.contains_mm(23.5));
        assert_eq!(spec.designation(), "24-400");
        assert_eq!(spec.threads_per_inch, Some(8));
    }

    #[test]
    fn test_optional_dimensions() {
        let spec = NeckSpec {
            size_code: 7,
            t: DimRange::new(0.3, 0.31),
            e: None,
            s: None,
            i: None,
            h: None,
            threads_per_inch: None,
        };
        let table = NeckSpecTable::from_specs(vec![spec]).unwrap();
        assert_eq!(table.get(7).unwrap().e, None);
    }

    #[test]
    fn test_rejects_inverted_and_duplicate() {
        let mut spec = spi_400().get(28).copied().unwrap();
        spec.h = Some(DimRange::new(0.5, 0.4));
        assert!(NeckSpecTable::from_specs(vec![spec]).is_err());

        let good = spi_400().get(28).copied().unwrap();
        let err = NeckSpecTable::from_specs(vec![good, good]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TABLE_ENTRY");
    }

    #[test]
    fn test_rejects_nan_dimension() {
        assert!(DimRange::new(0.9, 0.9).is_ordered());
        assert!(!DimRange::new(f64::NAN, 0.9).is_ordered());
        assert!(!DimRange::new(0.9, f64::NAN).is_ordered());

        let mut spec = spi_400().get(24).copied().unwrap();
        spec.t = DimRange::new(f64::NAN, 0.940);
        let err = NeckSpecTable::from_specs(vec![spec]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TABLE_ENTRY");
    }
}
