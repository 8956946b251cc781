//! # Removal Torque Estimate
//!
//! Removal torque is conventionally estimated as a percentage of application
//! torque. Industry sources put the typical value at 40-60%; the calculator
//! accepts 30-70%. The bound is enforced by callers, not here.

use crate::tables::TorqueRange;

/// Lowest removal percentage offered to users
pub const MIN_REMOVAL_PERCENT: f64 = 30.0;

/// Highest removal percentage offered to users
pub const MAX_REMOVAL_PERCENT: f64 = 70.0;

/// Default removal percentage
pub const DEFAULT_REMOVAL_PERCENT: f64 = 50.0;

/// Scale an application range by `removal_percent / 100`.
///
/// ```rust
/// use torque_core::calculations::removal::estimate_removal;
/// use torque_core::tables::TorqueRange;
///
/// let removal = estimate_removal(TorqueRange::new(17.0, 26.0), 50.0);
/// assert_eq!(removal, TorqueRange::new(8.5, 13.0));
/// ```
pub fn estimate_removal(application: TorqueRange, removal_percent: f64) -> TorqueRange {
    TorqueRange::new(
        application.min * removal_percent / 100.0,
        application.max * removal_percent / 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_matches_definition() {
        let app = TorqueRange::new(12.0, 21.0);
        for pct in [30.0, 40.0, 45.5, 50.0, 60.0, 70.0] {
            let r = estimate_removal(app, pct);
            assert_eq!(r.min, app.min * pct / 100.0);
            assert_eq!(r.max, app.max * pct / 100.0);
            assert!(r.min <= r.max);
        }
    }

    #[test]
    fn test_zero_percent() {
        assert_eq!(estimate_removal(TorqueRange::new(10.0, 18.0), 0.0), TorqueRange::new(0.0, 0.0));
    }

    #[test]
    fn test_out_of_band_percent_is_not_clamped() {
        let r = estimate_removal(TorqueRange::new(10.0, 20.0), 150.0);
        assert_eq!(r, TorqueRange::new(15.0, 30.0));
    }
}
