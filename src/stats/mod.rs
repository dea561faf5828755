//! Statistics computation engine.
//!
//! Pure, deterministic aggregation over scorecard snapshots:
//! - **overs**: cricket overs notation / integer ball conversion
//! - **ratio**: division with an explicit "no value" at zero denominators
//! - **batting** / **bowling**: per-player aggregates
//! - **leaderboard**: tie-break chains, top-N truncation, dense ranks
//! - **rollup**: club/team/season counting
//!
//! Nothing here touches storage; callers fetch a snapshot for the requested
//! scope and hand it in.

pub mod batting;
pub mod bowling;
pub mod leaderboard;
pub mod overs;
pub mod ratio;
pub mod rollup;

pub use batting::{batting_leaderboard_rows, batting_stats};
pub use bowling::{bowling_leaderboard_rows, bowling_stats};
pub use leaderboard::{batting_leaderboard, bowling_leaderboard, DEFAULT_TOP_N};
pub use overs::{balls_to_overs, overs_to_balls};
pub use ratio::safe_divide;
pub use rollup::{club_summary, is_upcoming, season_fixture_counts, team_fixture_summary};
