//! Fixture (scheduled match) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EntityId, FixtureId, SeasonId, TeamId};

/// Whether a fixture is played at home or away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeAway {
    Home,
    Away,
}

impl fmt::Display for HomeAway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeAway::Home => write!(f, "home"),
            HomeAway::Away => write!(f, "away"),
        }
    }
}

/// A scheduled or completed match for one club team.
///
/// `status` is a free string ("Scheduled", "Completed", "Abandoned", ...)
/// compared case-insensitively wherever it is counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// Unique identifier
    pub id: FixtureId,

    /// Season this fixture belongs to
    pub season_id: SeasonId,

    /// Club team playing the fixture
    pub team_id: TeamId,

    /// Opposition club/team name
    pub opponent: String,

    /// Home or away
    pub home_away: HomeAway,

    /// Ground name
    pub venue: Option<String>,

    /// Scheduled start time
    pub start_time: DateTime<Utc>,

    /// Fixture status
    pub status: String,

    /// Free-text notes
    pub notes: Option<String>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Fixture {
    /// Create a new scheduled fixture with a random ID.
    pub fn new(
        season_id: SeasonId,
        team_id: TeamId,
        opponent: String,
        home_away: HomeAway,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntityId::random(),
            season_id,
            team_id,
            opponent,
            home_away,
            venue: None,
            start_time,
            status: "Scheduled".to_string(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: String) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the venue.
    pub fn with_venue(mut self, venue: String) -> Self {
        self.venue = Some(venue);
        self
    }

    /// Case-insensitive status check.
    pub fn has_status(&self, status: &str) -> bool {
        self.status.trim().eq_ignore_ascii_case(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fixture() -> Fixture {
        Fixture::new(
            EntityId::from("season-1"),
            EntityId::from("team-1"),
            "Riverside CC".to_string(),
            HomeAway::Home,
            Utc::now(),
        )
    }

    #[test]
    fn test_fixture_creation() {
        let fixture = sample_fixture();

        assert_eq!(fixture.opponent, "Riverside CC");
        assert_eq!(fixture.status, "Scheduled");
        assert_eq!(fixture.home_away, HomeAway::Home);
        assert!(fixture.venue.is_none());
    }

    #[test]
    fn test_fixture_builder() {
        let fixture = sample_fixture()
            .with_status("Completed".to_string())
            .with_venue("The Oval".to_string());

        assert_eq!(fixture.status, "Completed");
        assert_eq!(fixture.venue.as_deref(), Some("The Oval"));
    }

    #[test]
    fn test_has_status_case_insensitive() {
        let fixture = sample_fixture().with_status("completed".to_string());

        assert!(fixture.has_status("Completed"));
        assert!(fixture.has_status("COMPLETED"));
        assert!(!fixture.has_status("Scheduled"));
    }

    #[test]
    fn test_home_away_serialization() {
        assert_eq!(serde_json::to_string(&HomeAway::Home).unwrap(), "\"home\"");
        assert_eq!(serde_json::to_string(&HomeAway::Away).unwrap(), "\"away\"");
    }
}
