//! Moderation workflow
//!
//! Encodes the legal transitions between story statuses as a total function
//! of `(current status, action)`. Every pair maps to a defined next status;
//! the table is enumerated explicitly so there are no gaps.
//!
//! Approve is state-dependent: it promotes a pending story to approved and
//! an approved story to published. Reject is legal from every state.
//! Rejected is terminal: approve does not re-enter the approved state.

use serde::{Deserialize, Serialize};

use super::entities::StoryStatus;

/// An admin moderation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl std::fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationAction::Approve => write!(f, "approve"),
            ModerationAction::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for ModerationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approve" => Ok(ModerationAction::Approve),
            "reject" => Ok(ModerationAction::Reject),
            _ => Err(format!("Unknown moderation action: {}", s)),
        }
    }
}

impl StoryStatus {
    /// Apply a moderation action to the current status.
    ///
    /// Pure and total: every `(status, action)` pair yields a defined next
    /// status. Transitions that change nothing (approve on published or
    /// rejected, reject on rejected) are no-ops.
    pub fn apply(self, action: ModerationAction) -> StoryStatus {
        match (self, action) {
            (StoryStatus::Pending, ModerationAction::Approve) => StoryStatus::Approved,
            (StoryStatus::Approved, ModerationAction::Approve) => StoryStatus::Published,
            (StoryStatus::Published, ModerationAction::Approve) => StoryStatus::Published,
            // Rejected is terminal for approve
            (StoryStatus::Rejected, ModerationAction::Approve) => StoryStatus::Rejected,
            (StoryStatus::Pending, ModerationAction::Reject) => StoryStatus::Rejected,
            (StoryStatus::Approved, ModerationAction::Reject) => StoryStatus::Rejected,
            (StoryStatus::Published, ModerationAction::Reject) => StoryStatus::Rejected,
            (StoryStatus::Rejected, ModerationAction::Reject) => StoryStatus::Rejected,
        }
    }
}
