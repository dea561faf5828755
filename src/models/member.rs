//! Club member model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, MemberId};

/// A registered club member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: Option<String>,

    /// Soft-delete flag; inactive members are hidden from lookups
    pub is_active: bool,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new active member with a random ID.
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::random(),
            name,
            email: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the contact email.
    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = Member::new("Joe Root".to_string());

        assert_eq!(member.name, "Joe Root");
        assert!(member.is_active);
        assert!(member.email.is_none());
        assert!(!member.id.as_str().is_empty());
    }

    #[test]
    fn test_member_with_email() {
        let member = Member::new("Joe Root".to_string()).with_email("joe@club.org".to_string());
        assert_eq!(member.email.as_deref(), Some("joe@club.org"));
    }

    #[test]
    fn test_member_serialization() {
        let member = Member::new("Joe Root".to_string());

        let json = serde_json::to_string(&member).unwrap();
        let deserialized: Member = serde_json::from_str(&json).unwrap();

        assert_eq!(member.id, deserialized.id);
        assert_eq!(member.name, deserialized.name);
    }
}
