//! Division that treats a zero denominator as "no value".
//!
//! Averages, economy rates, and strike rates are mathematically undefined
//! at zero dismissals/overs/wickets. That is a valid state, not an error:
//! callers propagate the `None` (rendered as "-" or JSON `null`) instead of
//! failing.

/// Divide, returning `None` when the denominator is exactly zero.
///
/// Defined results are rounded to 2 decimal places, half away from zero.
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    Some(round2(numerator / denominator))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
