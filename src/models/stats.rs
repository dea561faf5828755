//! Derived statistics models.
//!
//! None of these are persisted; every query recomputes them from the
//! current scorecard snapshot. Undefined ratios (average with no
//! dismissals, economy with no balls bowled, ...) are `None` and serialize
//! as JSON `null` — never a sentinel value.

use serde::{Deserialize, Serialize};

use super::{MemberId, SeasonId, SeasonRef, TeamId};

/// Aggregate batting statistics for one player over a scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBattingStats {
    /// The player
    pub member_id: MemberId,

    /// Display name (resolved by the caller/ranker)
    pub member_name: String,

    /// Season scope, or `None` for all-time
    pub season: Option<SeasonRef>,

    /// Distinct fixtures batted in
    pub matches: u32,

    /// Innings batted
    pub innings: u32,

    /// Innings ended not out
    pub not_outs: u32,

    /// Total runs scored
    pub runs: u32,

    /// Highest single-innings score
    pub high_score: u32,

    /// Runs per dismissal; `None` with zero dismissals
    pub average: Option<f64>,

    /// Runs per 100 balls; `None` with zero balls faced
    pub strike_rate: Option<f64>,

    /// Total legal balls faced
    pub balls_faced: u32,

    /// Total boundary fours
    pub fours: u32,

    /// Total boundary sixes
    pub sixes: u32,

    /// Innings of 50-99 runs
    pub fifties: u32,

    /// Innings of 100+ runs
    pub hundreds: u32,
}

impl PlayerBattingStats {
    /// Zeroed stats for a player with no recorded innings.
    pub fn empty(member_id: MemberId, member_name: String, season: Option<SeasonRef>) -> Self {
        Self {
            member_id,
            member_name,
            season,
            matches: 0,
            innings: 0,
            not_outs: 0,
            runs: 0,
            high_score: 0,
            average: None,
            strike_rate: None,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            fifties: 0,
            hundreds: 0,
        }
    }
}

/// Aggregate bowling statistics for one player over a scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBowlingStats {
    /// The player
    pub member_id: MemberId,

    /// Display name (resolved by the caller/ranker)
    pub member_name: String,

    /// Season scope, or `None` for all-time
    pub season: Option<SeasonRef>,

    /// Distinct fixtures bowled in
    pub matches: u32,

    /// Total overs bowled, in cricket notation
    pub overs: f64,

    /// Total maiden overs
    pub maidens: u32,

    /// Total runs conceded
    pub runs_conceded: u32,

    /// Total wickets taken
    pub wickets: u32,

    /// Runs conceded per wicket; `None` with zero wickets
    pub average: Option<f64>,

    /// Runs conceded per over; `None` with zero balls bowled
    pub economy: Option<f64>,

    /// Balls bowled per wicket; `None` with zero wickets
    pub strike_rate: Option<f64>,

    /// Best single-innings figures, formatted "wickets/runs"
    pub best_figures: Option<String>,

    /// Spells with exactly four wickets
    pub four_wicket_hauls: u32,

    /// Spells with five or more wickets
    pub five_wicket_hauls: u32,
}

impl PlayerBowlingStats {
    /// Zeroed stats for a player with no recorded spells.
    pub fn empty(member_id: MemberId, member_name: String, season: Option<SeasonRef>) -> Self {
        Self {
            member_id,
            member_name,
            season,
            matches: 0,
            overs: 0.0,
            maidens: 0,
            runs_conceded: 0,
            wickets: 0,
            average: None,
            economy: None,
            strike_rate: None,
            best_figures: None,
            four_wicket_hauls: 0,
            five_wicket_hauls: 0,
        }
    }
}

/// A ranked batting leaderboard row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattingLeaderboardEntry {
    /// 1-based dense rank in sort order
    pub rank: u32,

    #[serde(flatten)]
    pub stats: PlayerBattingStats,
}

/// A ranked bowling leaderboard row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowlingLeaderboardEntry {
    /// 1-based dense rank in sort order
    pub rank: u32,

    #[serde(flatten)]
    pub stats: PlayerBowlingStats,
}

/// Club-wide member and fixture tallies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClubSummary {
    pub total_members: u32,
    pub active_members: u32,
    pub inactive_members: u32,
    pub total_fixtures: u32,
    pub scheduled_fixtures: u32,
    pub completed_fixtures: u32,
}

/// Fixture tallies for one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamFixtureSummary {
    pub team_id: TeamId,
    pub home: u32,
    pub away: u32,
    pub completed: u32,
    pub upcoming: u32,
}

/// Fixture count for one season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonFixtureCount {
    pub season_id: SeasonId,
    pub fixtures: u32,
}
