//! Per-player batting aggregation.

use std::collections::{BTreeSet, HashSet};

use crate::models::{BattingInnings, MemberId, PlayerBattingStats, SeasonRef};

use super::ratio::safe_divide;

/// Compute aggregate batting statistics for one player.
///
/// `innings` is the full set of records for the scope (season or all-time);
/// filtering to the member happens here. A player with no recorded innings
/// yields zeroed counts with undefined ratios — that is a valid state, not
/// an error.
pub fn batting_stats(
    innings: &[BattingInnings],
    member_id: &MemberId,
    member_name: &str,
    season: Option<SeasonRef>,
) -> PlayerBattingStats {
    let own: Vec<&BattingInnings> = innings
        .iter()
        .filter(|i| &i.member_id == member_id)
        .collect();

    if own.is_empty() {
        return PlayerBattingStats::empty(member_id.clone(), member_name.to_string(), season);
    }

    let matches = own
        .iter()
        .map(|i| i.fixture_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u32;

    let innings_count = own.len() as u32;
    let not_outs = own.iter().filter(|i| !i.is_out).count() as u32;
    let dismissals = innings_count - not_outs;

    let runs: u32 = own.iter().map(|i| i.runs).sum();
    let balls_faced: u32 = own.iter().map(|i| i.balls).sum();
    let fours: u32 = own.iter().map(|i| i.fours).sum();
    let sixes: u32 = own.iter().map(|i| i.sixes).sum();
    let high_score = own.iter().map(|i| i.runs).max().unwrap_or(0);

    // Milestone buckets are exclusive and independent of dismissal: a
    // not-out 50-99 still counts as a fifty.
    let fifties = own.iter().filter(|i| (50..100).contains(&i.runs)).count() as u32;
    let hundreds = own.iter().filter(|i| i.runs >= 100).count() as u32;

    let average = safe_divide(runs as f64, dismissals as f64);
    let strike_rate = safe_divide(runs as f64 * 100.0, balls_faced as f64);

    PlayerBattingStats {
        member_id: member_id.clone(),
        member_name: member_name.to_string(),
        season,
        matches,
        innings: innings_count,
        not_outs,
        runs,
        high_score,
        average,
        strike_rate,
        balls_faced,
        fours,
        sixes,
        fifties,
        hundreds,
    }
}

/// Compute per-player batting rows for every player in scope.
///
/// Players with zero innings never appear (they have no records to group).
/// Names and season scope are filled in by the ranker/caller. Rows come out
/// ordered by member id so downstream stable sorts are deterministic.
pub fn batting_leaderboard_rows(innings: &[BattingInnings]) -> Vec<PlayerBattingStats> {
    let member_ids: BTreeSet<&MemberId> = innings.iter().map(|i| &i.member_id).collect();

    member_ids
        .into_iter()
        .map(|id| batting_stats(innings, id, "", None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    fn innings(
        fixture: &str,
        member: &str,
        runs: u32,
        balls: u32,
        is_out: bool,
    ) -> BattingInnings {
        let mut i = BattingInnings::new(
            EntityId::from(fixture),
            EntityId::from("team-1"),
            EntityId::from(member),
            1,
        )
        .with_score(runs, balls);
        if is_out {
            i = i.out(Some("bowled".to_string()));
        }
        i
    }

    #[test]
    fn test_batting_aggregate_example() {
        let records = vec![
            innings("f1", "m1", 40, 30, true),
            innings("f2", "m1", 60, 50, false),
            innings("f3", "m1", 10, 8, true),
        ];

        let stats = batting_stats(&records, &EntityId::from("m1"), "Test", None);

        assert_eq!(stats.innings, 3);
        assert_eq!(stats.not_outs, 1);
        assert_eq!(stats.runs, 110);
        assert_eq!(stats.balls_faced, 88);
        assert_eq!(stats.high_score, 60);
        // 110 runs over 2 dismissals
        assert_eq!(stats.average, Some(55.0));
        // 110 * 100 / 88
        assert_eq!(stats.strike_rate, Some(125.0));
        assert_eq!(stats.fifties, 1);
        assert_eq!(stats.hundreds, 0);
    }

    #[test]
    fn test_no_innings_yields_zeroed_stats() {
        let records = vec![innings("f1", "m2", 12, 20, true)];

        let stats = batting_stats(&records, &EntityId::from("m1"), "Test", None);

        assert_eq!(stats.innings, 0);
        assert_eq!(stats.runs, 0);
        assert_eq!(stats.high_score, 0);
        assert!(stats.average.is_none());
        assert!(stats.strike_rate.is_none());
    }

    #[test]
    fn test_never_dismissed_has_no_average() {
        let records = vec![
            innings("f1", "m1", 30, 25, false),
            innings("f2", "m1", 45, 40, false),
        ];

        let stats = batting_stats(&records, &EntityId::from("m1"), "Test", None);

        assert_eq!(stats.not_outs, 2);
        assert!(stats.average.is_none());
        assert_eq!(stats.strike_rate, Some(115.38));
    }

    #[test]
    fn test_matches_counts_distinct_fixtures() {
        // Two innings in the same fixture (e.g., a two-innings match)
        let records = vec![
            innings("f1", "m1", 20, 15, true),
            innings("f1", "m1", 35, 30, true),
            innings("f2", "m1", 5, 4, true),
        ];

        let stats = batting_stats(&records, &EntityId::from("m1"), "Test", None);

        assert_eq!(stats.innings, 3);
        assert_eq!(stats.matches, 2);
    }

    #[test]
    fn test_milestone_buckets_exclusive() {
        let records = vec![
            innings("f1", "m1", 49, 30, true),
            innings("f2", "m1", 50, 40, false), // not-out fifty still counts
            innings("f3", "m1", 99, 70, true),
            innings("f4", "m1", 100, 80, true),
            innings("f5", "m1", 143, 110, false),
        ];

        let stats = batting_stats(&records, &EntityId::from("m1"), "Test", None);

        assert_eq!(stats.fifties, 2);
        assert_eq!(stats.hundreds, 2);
    }

    #[test]
    fn test_leaderboard_rows_group_by_member() {
        let records = vec![
            innings("f1", "m1", 40, 30, true),
            innings("f1", "m2", 10, 12, true),
            innings("f2", "m1", 25, 20, false),
        ];

        let rows = batting_leaderboard_rows(&records);

        assert_eq!(rows.len(), 2);
        let m1 = rows.iter().find(|r| r.member_id.as_str() == "m1").unwrap();
        assert_eq!(m1.runs, 65);
        assert_eq!(m1.innings, 2);
        let m2 = rows.iter().find(|r| r.member_id.as_str() == "m2").unwrap();
        assert_eq!(m2.runs, 10);
    }

    #[test]
    fn test_leaderboard_rows_empty_input() {
        assert!(batting_leaderboard_rows(&[]).is_empty());
    }
}
