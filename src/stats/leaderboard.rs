//! Leaderboard ranking.
//!
//! Takes aggregated per-player rows, sorts them with the discipline's
//! tie-break chain, truncates to top N, and assigns dense 1-based ranks.
//! Ranks strictly follow sort order; exact ties do NOT share a rank.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{
    BattingLeaderboardEntry, BowlingLeaderboardEntry, MemberId, PlayerBattingStats,
    PlayerBowlingStats, SeasonRef,
};

/// Leaderboard size used when the caller passes no limit (or a limit <= 0).
pub const DEFAULT_TOP_N: usize = 10;

/// Batting order: runs desc, then average desc, then strike rate desc.
/// An undefined average/strike rate sorts as zero.
pub fn batting_order(a: &PlayerBattingStats, b: &PlayerBattingStats) -> Ordering {
    b.runs
        .cmp(&a.runs)
        .then_with(|| cmp_f64(b.average.unwrap_or(0.0), a.average.unwrap_or(0.0)))
        .then_with(|| cmp_f64(b.strike_rate.unwrap_or(0.0), a.strike_rate.unwrap_or(0.0)))
}

/// Bowling order: wickets desc, then average asc, then economy asc.
/// An undefined average/economy sorts worst (after every finite value).
pub fn bowling_order(a: &PlayerBowlingStats, b: &PlayerBowlingStats) -> Ordering {
    b.wickets
        .cmp(&a.wickets)
        .then_with(|| {
            cmp_f64(
                a.average.unwrap_or(f64::INFINITY),
                b.average.unwrap_or(f64::INFINITY),
            )
        })
        .then_with(|| {
            cmp_f64(
                a.economy.unwrap_or(f64::INFINITY),
                b.economy.unwrap_or(f64::INFINITY),
            )
        })
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Sort rows, truncate to the top N, and pair each with its 1-based rank.
pub fn rank<T, F>(mut rows: Vec<T>, order: F, top_n: Option<i64>) -> Vec<(u32, T)>
where
    F: Fn(&T, &T) -> Ordering,
{
    let limit = match top_n {
        Some(n) if n > 0 => n as usize,
        _ => DEFAULT_TOP_N,
    };

    rows.sort_by(&order);
    rows.truncate(limit);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| (i as u32 + 1, row))
        .collect()
}

/// Resolve a member's display name, falling back to a synthesized label
/// for ids missing from the lookup (e.g., soft-deleted members).
pub fn resolve_member_name(names: &HashMap<MemberId, String>, id: &MemberId) -> String {
    names
        .get(id)
        .cloned()
        .unwrap_or_else(|| format!("Player {}", id))
}

/// Build the ranked batting leaderboard from aggregated rows.
pub fn batting_leaderboard(
    rows: Vec<PlayerBattingStats>,
    names: &HashMap<MemberId, String>,
    season: Option<SeasonRef>,
    top_n: Option<i64>,
) -> Vec<BattingLeaderboardEntry> {
    rank(rows, batting_order, top_n)
        .into_iter()
        .map(|(position, mut stats)| {
            stats.member_name = resolve_member_name(names, &stats.member_id);
            stats.season = season.clone();
            BattingLeaderboardEntry {
                rank: position,
                stats,
            }
        })
        .collect()
}

/// Build the ranked bowling leaderboard from aggregated rows.
pub fn bowling_leaderboard(
    rows: Vec<PlayerBowlingStats>,
    names: &HashMap<MemberId, String>,
    season: Option<SeasonRef>,
    top_n: Option<i64>,
) -> Vec<BowlingLeaderboardEntry> {
    rank(rows, bowling_order, top_n)
        .into_iter()
        .map(|(position, mut stats)| {
            stats.member_name = resolve_member_name(names, &stats.member_id);
            stats.season = season.clone();
            BowlingLeaderboardEntry {
                rank: position,
                stats,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    fn batting_row(member: &str, runs: u32, average: Option<f64>, sr: Option<f64>) -> PlayerBattingStats {
        let mut row = PlayerBattingStats::empty(EntityId::from(member), String::new(), None);
        row.runs = runs;
        row.innings = 1;
        row.average = average;
        row.strike_rate = sr;
        row
    }

    fn bowling_row(member: &str, wickets: u32, average: Option<f64>, economy: Option<f64>) -> PlayerBowlingStats {
        let mut row = PlayerBowlingStats::empty(EntityId::from(member), String::new(), None);
        row.wickets = wickets;
        row.average = average;
        row.economy = economy;
        row
    }

    #[test]
    fn test_batting_tie_break_on_average() {
        let rows = vec![
            batting_row("m1", 120, Some(40.0), Some(90.0)),
            batting_row("m2", 120, Some(60.0), Some(80.0)),
        ];

        let ranked = rank(rows, batting_order, None);

        // Equal runs: the higher average ranks strictly above, ranks 1,2
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[0].1.member_id.as_str(), "m2");
        assert_eq!(ranked[1].0, 2);
        assert_eq!(ranked[1].1.member_id.as_str(), "m1");
    }

    #[test]
    fn test_batting_undefined_average_sorts_as_zero() {
        let rows = vec![
            batting_row("m1", 50, None, None),
            batting_row("m2", 50, Some(10.0), Some(50.0)),
        ];

        let ranked = rank(rows, batting_order, None);
        assert_eq!(ranked[0].1.member_id.as_str(), "m2");
    }

    #[test]
    fn test_bowling_undefined_average_sorts_worst() {
        let rows = vec![
            bowling_row("m1", 10, None, None),
            bowling_row("m2", 10, Some(30.0), Some(4.5)),
        ];

        let ranked = rank(rows, bowling_order, None);
        assert_eq!(ranked[0].1.member_id.as_str(), "m2");
    }

    #[test]
    fn test_bowling_order_wickets_first() {
        let rows = vec![
            bowling_row("m1", 8, Some(12.0), Some(3.0)),
            bowling_row("m2", 12, Some(25.0), Some(5.5)),
        ];

        let ranked = rank(rows, bowling_order, None);
        assert_eq!(ranked[0].1.member_id.as_str(), "m2");
    }

    #[test]
    fn test_rank_truncates_to_top_n() {
        let rows: Vec<_> = (0..25)
            .map(|i| batting_row(&format!("m{:02}", i), 100 + i, None, None))
            .collect();

        let ranked = rank(rows, batting_order, Some(5));
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].1.runs, 124);
        assert_eq!(ranked.last().unwrap().0, 5);
    }

    #[test]
    fn test_rank_defaults_top_n() {
        let rows: Vec<_> = (0..25)
            .map(|i| batting_row(&format!("m{:02}", i), 100 + i, None, None))
            .collect();

        assert_eq!(rank(rows.clone(), batting_order, None).len(), DEFAULT_TOP_N);
        assert_eq!(rank(rows.clone(), batting_order, Some(0)).len(), DEFAULT_TOP_N);
        assert_eq!(rank(rows, batting_order, Some(-3)).len(), DEFAULT_TOP_N);
    }

    #[test]
    fn test_resolve_member_name_fallback() {
        let mut names = HashMap::new();
        names.insert(EntityId::from("m1"), "Joe Root".to_string());

        assert_eq!(resolve_member_name(&names, &EntityId::from("m1")), "Joe Root");
        assert_eq!(
            resolve_member_name(&names, &EntityId::from("m9")),
            "Player m9"
        );
    }

    #[test]
    fn test_batting_leaderboard_assembles_entries() {
        let mut names = HashMap::new();
        names.insert(EntityId::from("m1"), "Joe Root".to_string());

        let rows = vec![
            batting_row("m1", 200, Some(50.0), Some(88.0)),
            batting_row("m2", 150, Some(30.0), Some(70.0)),
        ];

        let entries = batting_leaderboard(rows, &names, None, None);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].stats.member_name, "Joe Root");
        assert_eq!(entries[1].stats.member_name, "Player m2");
    }
}
