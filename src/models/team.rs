//! Club team model.

use serde::{Deserialize, Serialize};

use super::{EntityId, TeamId};

/// A team within the club (e.g., 1st XI, 2nd XI, Sunday side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    pub id: TeamId,

    /// Team name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Soft-delete flag
    pub is_active: bool,
}

impl Team {
    /// Create a new active team with a random ID.
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::random(),
            name,
            description: None,
            is_active: true,
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}
