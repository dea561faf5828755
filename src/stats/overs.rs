//! Cricket overs notation conversion.
//!
//! In cricket notation the integer part of an overs figure counts complete
//! six-ball overs and the single fractional digit counts additional legal
//! balls, so 4.2 means 26 balls, not 4.2 overs of six balls. All arithmetic
//! over spells goes through integer balls: convert, sum, convert back.

/// Convert an overs figure in cricket notation to a total ball count.
///
/// The fractional digit is clamped to [0, 5]; invalid notation such as 4.6
/// (or negative fractional noise) is absorbed silently rather than rejected,
/// to tolerate inconsistent historical data.
pub fn overs_to_balls(overs: f64) -> u32 {
    let whole = overs.trunc() as i64;
    let balls = ((overs - overs.trunc()) * 10.0).round() as i64;
    let balls = balls.clamp(0, 5);
    (whole * 6 + balls).max(0) as u32
}

/// Convert a total ball count back to cricket overs notation.
///
/// 7 balls become 1.1 (one over, one ball), not 1.1666...
pub fn balls_to_overs(total_balls: u32) -> f64 {
    if total_balls == 0 {
        return 0.0;
    }
    let whole_overs = total_balls / 6;
    let remainder = total_balls % 6;
    whole_overs as f64 + remainder as f64 / 10.0
}
