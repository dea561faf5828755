//! Scorecard models: per-player batting innings and bowling spells.
//!
//! Both record types are replaced wholesale whenever a match result is
//! upserted for a fixture, and deleted when the result is deleted. Their IDs
//! are deterministic over their identifying fields so a re-upsert of the
//! same scorecard produces identical records.

use serde::{Deserialize, Serialize};

use super::{EntityId, FixtureId, InningsId, MemberId, SpellId, TeamId};

/// One player's batting performance in one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattingInnings {
    /// Unique identifier (derived from fixture + member + batting order)
    pub id: InningsId,

    /// Fixture this innings belongs to
    pub fixture_id: FixtureId,

    /// Team the player batted for
    pub team_id: TeamId,

    /// The batter
    pub member_id: MemberId,

    /// 1-based position in the batting order
    pub batting_order: u32,

    /// Runs scored
    pub runs: u32,

    /// Legal balls faced
    pub balls: u32,

    /// Boundary fours
    pub fours: u32,

    /// Boundary sixes
    pub sixes: u32,

    /// Whether the batter was dismissed
    pub is_out: bool,

    /// Dismissal type ("bowled", "caught", "lbw", ...)
    pub dismissal_type: Option<String>,

    /// Dismissing bowler, if recorded
    pub bowler_id: Option<MemberId>,

    /// Catching/run-out fielder, if recorded
    pub fielder_id: Option<MemberId>,

    /// Free-text notes
    pub notes: Option<String>,
}

impl BattingInnings {
    /// Create a new not-out innings with no runs recorded.
    pub fn new(
        fixture_id: FixtureId,
        team_id: TeamId,
        member_id: MemberId,
        batting_order: u32,
    ) -> Self {
        let id = EntityId::generate(&[
            "batting",
            fixture_id.as_str(),
            member_id.as_str(),
            &batting_order.to_string(),
        ]);

        Self {
            id,
            fixture_id,
            team_id,
            member_id,
            batting_order,
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            is_out: false,
            dismissal_type: None,
            bowler_id: None,
            fielder_id: None,
            notes: None,
        }
    }

    /// Builder method to set runs and balls faced.
    pub fn with_score(mut self, runs: u32, balls: u32) -> Self {
        self.runs = runs;
        self.balls = balls;
        self
    }

    /// Builder method to set boundary counts.
    pub fn with_boundaries(mut self, fours: u32, sixes: u32) -> Self {
        self.fours = fours;
        self.sixes = sixes;
        self
    }

    /// Builder method to mark the batter dismissed.
    pub fn out(mut self, dismissal_type: Option<String>) -> Self {
        self.is_out = true;
        self.dismissal_type = dismissal_type;
        self
    }
}

/// One player's bowling performance in one fixture.
///
/// `overs` is cricket notation: the integer part is complete six-ball overs
/// and the single fractional digit is additional legal balls (0-5). It is
/// never a base-10 fraction; convert to balls before doing arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowlingSpell {
    /// Unique identifier (derived from fixture + member)
    pub id: SpellId,

    /// Fixture this spell belongs to
    pub fixture_id: FixtureId,

    /// Team the player bowled for
    pub team_id: TeamId,

    /// The bowler
    pub member_id: MemberId,

    /// Overs bowled, in cricket notation
    pub overs: f64,

    /// Maiden overs
    pub maidens: u32,

    /// Runs conceded
    pub runs_conceded: u32,

    /// Wickets taken
    pub wickets: u32,

    /// No-balls bowled
    pub no_balls: u32,

    /// Wides bowled
    pub wides: u32,

    /// Free-text notes
    pub notes: Option<String>,
}

impl BowlingSpell {
    /// Create a new empty spell.
    pub fn new(fixture_id: FixtureId, team_id: TeamId, member_id: MemberId) -> Self {
        let id = EntityId::generate(&["bowling", fixture_id.as_str(), member_id.as_str()]);

        Self {
            id,
            fixture_id,
            team_id,
            member_id,
            overs: 0.0,
            maidens: 0,
            runs_conceded: 0,
            wickets: 0,
            no_balls: 0,
            wides: 0,
            notes: None,
        }
    }

    /// Builder method to set the main bowling figures.
    pub fn with_figures(mut self, overs: f64, maidens: u32, runs_conceded: u32, wickets: u32) -> Self {
        self.overs = overs;
        self.maidens = maidens;
        self.runs_conceded = runs_conceded;
        self.wickets = wickets;
        self
    }

    /// Builder method to set extras.
    pub fn with_extras(mut self, no_balls: u32, wides: u32) -> Self {
        self.no_balls = no_balls;
        self.wides = wides;
        self
    }
}
