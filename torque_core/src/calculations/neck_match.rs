//! # Neck Finish Matching
//!
//! Picks the neck-finish size code that best fits a cap diameter by comparing
//! the diameter (mm) against each finish's thread outer diameter `T`
//! (tabulated in inches, converted to mm).
//!
//! Two linear passes:
//!
//! 1. **Containment**: among finishes whose `T` range contains the diameter,
//!    take the one whose `T` midpoint is closest.
//! 2. **Nearest**: if none contains it, take the closest `T` midpoint over
//!    the whole table.
//!
//! Equal distances resolve to the lowest size code, so the result does not
//! depend on table declaration order.

use serde::{Deserialize, Serialize};

use crate::tables::{NeckSpec, NeckSpecTable};

/// Detailed match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeckMatch {
    /// Matched size code
    pub size_code: u32,
    /// True if the diameter lies within the finish's T range
    pub contained: bool,
    /// |T midpoint - diameter| in mm
    pub distance_mm: f64,
}

/// Best-matching size code, or `None` for an empty table.
///
/// ```rust
/// use torque_core::calculations::neck_match::match_neck_spec;
/// use torque_core::tables::TableSet;
///
/// let specs = TableSet::VendorExtended.neck_specs().unwrap();
/// assert_eq!(match_neck_spec(specs, 24.0), Some(24));
/// assert_eq!(match_neck_spec(specs, 27.6), Some(28));
/// ```
pub fn match_neck_spec(table: &NeckSpecTable, diameter_mm: f64) -> Option<u32> {
    find_neck_match(table, diameter_mm).map(|m| m.size_code)
}

/// Same as [`match_neck_spec`] but reports which pass produced the match.
pub fn find_neck_match(table: &NeckSpecTable, diameter_mm: f64) -> Option<NeckMatch> {
    let containing = closest(table.iter().filter(|s| s.t.contains_mm(diameter_mm)), diameter_mm);
    if let Some((spec, distance_mm)) = containing {
        return Some(NeckMatch {
            size_code: spec.size_code,
            contained: true,
            distance_mm,
        });
    }

    closest(table.iter(), diameter_mm).map(|(spec, distance_mm)| NeckMatch {
        size_code: spec.size_code,
        contained: false,
        distance_mm,
    })
}

fn closest<'a>(specs: impl Iterator<Item = &'a NeckSpec>, diameter_mm: f64) -> Option<(&'a NeckSpec, f64)> {
    let mut best: Option<(&NeckSpec, f64)> = None;
    for spec in specs {
        let distance = (spec.t_center_mm() - diameter_mm).abs();
        let better = match best {
            None => true,
            Some((current, best_distance)) => {
                distance < best_distance || (distance == best_distance && spec.size_code < current.size_code)
            }
        };
        if better {
            best = Some((spec, distance));
        }
    }
    best
}
