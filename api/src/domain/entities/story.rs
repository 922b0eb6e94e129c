//! Story domain entity
//!
//! A user-submitted success narrative with a moderation status. The status
//! governs public visibility: only published stories appear on the public
//! read boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub Uuid);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for StoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation status of a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    Pending,
    Approved,
    Rejected,
    Published,
}

impl std::fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryStatus::Pending => write!(f, "pending"),
            StoryStatus::Approved => write!(f, "approved"),
            StoryStatus::Rejected => write!(f, "rejected"),
            StoryStatus::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for StoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StoryStatus::Pending),
            "approved" => Ok(StoryStatus::Approved),
            "rejected" => Ok(StoryStatus::Rejected),
            "published" => Ok(StoryStatus::Published),
            _ => Err(format!("Unknown story status: {}", s)),
        }
    }
}

/// A submitted success story
#[derive(Debug, Clone, Serialize)]
pub struct Story {
    pub id: StoryId,
    pub status: StoryStatus,
    pub author: String,
    pub title: String,
    pub body: String,
    /// Classification tags, set at submission
    pub category: String,
    pub ai_tool: String,
    pub outcome_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// Check if the story is visible to public readers
    pub fn is_public(&self) -> bool {
        self.status == StoryStatus::Published
    }
}

/// Normalized draft handed to the store's create operation.
///
/// Drafts carry no status or id; every story enters the store as pending
/// with a freshly assigned id.
#[derive(Debug, Clone)]
pub struct NewStory {
    pub author: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub ai_tool: String,
    pub outcome_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_story(status: StoryStatus) -> Story {
        Story {
            id: StoryId::new(),
            status,
            author: "A".to_string(),
            title: "Test Story".to_string(),
            body: "Body".to_string(),
            category: "legal".to_string(),
            ai_tool: "claude".to_string(),
            outcome_type: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn story_is_public_only_when_published() {
        assert!(make_story(StoryStatus::Published).is_public());
        assert!(!make_story(StoryStatus::Pending).is_public());
        assert!(!make_story(StoryStatus::Approved).is_public());
        assert!(!make_story(StoryStatus::Rejected).is_public());
    }

    #[test]
    fn story_status_display() {
        assert_eq!(StoryStatus::Pending.to_string(), "pending");
        assert_eq!(StoryStatus::Approved.to_string(), "approved");
        assert_eq!(StoryStatus::Rejected.to_string(), "rejected");
        assert_eq!(StoryStatus::Published.to_string(), "published");
    }

    #[test]
    fn story_status_from_str() {
        assert_eq!(
            "pending".parse::<StoryStatus>().unwrap(),
            StoryStatus::Pending
        );
        assert_eq!(
            "Approved".parse::<StoryStatus>().unwrap(),
            StoryStatus::Approved
        );
        assert_eq!(
            "rejected".parse::<StoryStatus>().unwrap(),
            StoryStatus::Rejected
        );
        assert_eq!(
            "published".parse::<StoryStatus>().unwrap(),
            StoryStatus::Published
        );
        assert!("archived".parse::<StoryStatus>().is_err());
    }

    #[test]
    fn story_status_serde_is_lowercase() {
        let json = serde_json::to_string(&StoryStatus::Published).unwrap();
        assert_eq!(json, "\"published\"");
        let status: StoryStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, StoryStatus::Pending);
    }

    #[test]
    fn story_id_display() {
        let id = StoryId(uuid::Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
