//! Club, team, and season counting rollups.
//!
//! Plain filtering and tallying over members and fixtures. Status strings
//! compare case-insensitively throughout.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{
    ClubSummary, Fixture, HomeAway, Member, SeasonFixtureCount, TeamFixtureSummary, TeamId,
};

/// A fixture counts as upcoming when it has not started yet and its status
/// is Scheduled, Planned, or blank.
pub fn is_upcoming(fixture: &Fixture, now: DateTime<Utc>) -> bool {
    fixture.start_time >= now
        && (fixture.has_status("scheduled")
            || fixture.has_status("planned")
            || fixture.status.trim().is_empty())
}

/// Club-wide member and fixture tallies.
pub fn club_summary(members: &[Member], fixtures: &[Fixture]) -> ClubSummary {
    let active_members = members.iter().filter(|m| m.is_active).count() as u32;

    ClubSummary {
        total_members: members.len() as u32,
        active_members,
        inactive_members: members.len() as u32 - active_members,
        total_fixtures: fixtures.len() as u32,
        scheduled_fixtures: fixtures.iter().filter(|f| f.has_status("scheduled")).count() as u32,
        completed_fixtures: fixtures.iter().filter(|f| f.has_status("completed")).count() as u32,
    }
}

/// Home/away/completed/upcoming fixture tallies for one team.
pub fn team_fixture_summary(
    team_id: &TeamId,
    fixtures: &[Fixture],
    now: DateTime<Utc>,
) -> TeamFixtureSummary {
    let own: Vec<&Fixture> = fixtures.iter().filter(|f| &f.team_id == team_id).collect();

    TeamFixtureSummary {
        team_id: team_id.clone(),
        home: own.iter().filter(|f| f.home_away == HomeAway::Home).count() as u32,
        away: own.iter().filter(|f| f.home_away == HomeAway::Away).count() as u32,
        completed: own.iter().filter(|f| f.has_status("completed")).count() as u32,
        upcoming: own.iter().filter(|f| is_upcoming(f, now)).count() as u32,
    }
}

/// Fixture counts grouped by season, ordered by season id.
pub fn season_fixture_counts(fixtures: &[Fixture]) -> Vec<SeasonFixtureCount> {
    let mut counts: BTreeMap<&crate::models::SeasonId, u32> = BTreeMap::new();
    for fixture in fixtures {
        *counts.entry(&fixture.season_id).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(season_id, fixtures)| SeasonFixtureCount {
            season_id: season_id.clone(),
            fixtures,
        })
        .collect()
}
