//! Per-player bowling aggregation.

use std::collections::{BTreeSet, HashSet};

use crate::models::{BowlingSpell, MemberId, PlayerBowlingStats, SeasonRef};

use super::overs::{balls_to_overs, overs_to_balls};
use super::ratio::safe_divide;

/// Compute aggregate bowling statistics for one player.
///
/// All overs arithmetic goes through integer balls: each spell's notation
/// figure converts to balls, the balls sum, and the total converts back.
/// Summing the notation figures directly would be numerically wrong
/// (4.2 notation is not 4.2 decimal overs).
pub fn bowling_stats(
    spells: &[BowlingSpell],
    member_id: &MemberId,
    member_name: &str,
    season: Option<SeasonRef>,
) -> PlayerBowlingStats {
    let own: Vec<&BowlingSpell> = spells
        .iter()
        .filter(|s| &s.member_id == member_id)
        .collect();

    if own.is_empty() {
        return PlayerBowlingStats::empty(member_id.clone(), member_name.to_string(), season);
    }

    let matches = own
        .iter()
        .map(|s| s.fixture_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u32;

    let total_balls: u32 = own.iter().map(|s| overs_to_balls(s.overs)).sum();
    let maidens: u32 = own.iter().map(|s| s.maidens).sum();
    let runs_conceded: u32 = own.iter().map(|s| s.runs_conceded).sum();
    let wickets: u32 = own.iter().map(|s| s.wickets).sum();

    let average = if wickets > 0 {
        safe_divide(runs_conceded as f64, wickets as f64)
    } else {
        None
    };

    // Economy divides by fractional overs (balls / 6), never by the
    // notation value.
    let economy = if total_balls > 0 {
        safe_divide(runs_conceded as f64, total_balls as f64 / 6.0)
    } else {
        None
    };

    let strike_rate = if wickets > 0 && total_balls > 0 {
        safe_divide(total_balls as f64, wickets as f64)
    } else {
        None
    };

    let best_figures = best_figures(&own);

    let four_wicket_hauls = own.iter().filter(|s| s.wickets == 4).count() as u32;
    let five_wicket_hauls = own.iter().filter(|s| s.wickets >= 5).count() as u32;

    PlayerBowlingStats {
        member_id: member_id.clone(),
        member_name: member_name.to_string(),
        season,
        matches,
        overs: balls_to_overs(total_balls),
        maidens,
        runs_conceded,
        wickets,
        average,
        economy,
        strike_rate,
        best_figures,
        four_wicket_hauls,
        five_wicket_hauls,
    }
}

/// The single best spell: most wickets, ties broken by fewest runs.
fn best_figures(spells: &[&BowlingSpell]) -> Option<String> {
    spells
        .iter()
        .max_by(|a, b| {
            a.wickets
                .cmp(&b.wickets)
                .then_with(|| b.runs_conceded.cmp(&a.runs_conceded))
        })
        .map(|s| format!("{}/{}", s.wickets, s.runs_conceded))
}

/// Compute per-player bowling rows for every player in scope.
///
/// Players with zero wickets are dropped from leaderboard candidacy.
/// Rows come out ordered by member id so downstream stable sorts are
/// deterministic.
pub fn bowling_leaderboard_rows(spells: &[BowlingSpell]) -> Vec<PlayerBowlingStats> {
    let member_ids: BTreeSet<&MemberId> = spells.iter().map(|s| &s.member_id).collect();

    member_ids
        .into_iter()
        .map(|id| bowling_stats(spells, id, "", None))
        .filter(|row| row.wickets > 0)
        .collect()
}
