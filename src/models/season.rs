//! Playing season model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, SeasonId};

/// A playing season; fixtures belong to exactly one season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    /// Unique identifier
    pub id: SeasonId,

    /// Season name (e.g., "2026")
    pub name: String,

    /// First day of the season
    pub start_date: NaiveDate,

    /// Last day of the season
    pub end_date: NaiveDate,

    /// Soft-delete flag
    pub is_active: bool,
}

impl Season {
    /// Create a new active season with a random ID.
    pub fn new(name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: EntityId::random(),
            name,
            start_date,
            end_date,
            is_active: true,
        }
    }
}

/// Lightweight season reference embedded in stats DTOs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRef {
    pub id: SeasonId,
    pub name: String,
}

impl From<&Season> for SeasonRef {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id.clone(),
            name: season.name.clone(),
        }
    }
}
