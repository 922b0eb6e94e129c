//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::app::StorySubmission;
use crate::domain::entities::{Story, StoryId, StoryStatus};

/// Create a test story with a specific status
pub fn test_story_with_status(status: StoryStatus) -> Story {
    Story {
        id: StoryId::new(),
        status,
        author: "A".to_string(),
        title: "Claude saved my lease".to_string(),
        body: "My landlord tried to keep the deposit...".to_string(),
        category: "legal".to_string(),
        ai_tool: "claude".to_string(),
        outcome_type: Some("money_recovered".to_string()),
        created_at: Utc::now(),
    }
}

/// Create a valid test submission
pub fn test_submission() -> StorySubmission {
    StorySubmission {
        title: "X".to_string(),
        author: "A".to_string(),
        body: "B".to_string(),
        category: "legal".to_string(),
        ai_tool: "claude".to_string(),
        outcome_type: None,
    }
}
