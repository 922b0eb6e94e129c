//! Moderation service
//!
//! Applies admin actions to stories through the transition table in
//! `domain::moderation`. Status writes are conditional on the status the
//! transition was computed from, so two moderators racing on the same story
//! can never leave it in a state unreachable from its prior status.

use std::sync::Arc;

use crate::domain::entities::{Story, StoryId};
use crate::domain::moderation::ModerationAction;
use crate::domain::ports::StoryRepository;
use crate::error::{AppError, DomainError};

/// Attempts before a persistent race is surfaced as a conflict
const MAX_MODERATION_RETRIES: usize = 3;

/// Service for applying moderation actions
pub struct ModerationService<SR>
where
    SR: StoryRepository,
{
    stories: Arc<SR>,
}

impl<SR> ModerationService<SR>
where
    SR: StoryRepository,
{
    pub fn new(stories: Arc<SR>) -> Self {
        Self { stories }
    }

    /// Apply an action to a story and return it with its new status.
    ///
    /// Lost conditional writes are retried by re-reading the current status
    /// and recomputing the transition. Actions are idempotent per target
    /// state, so a retry never skips a state.
    pub async fn moderate(
        &self,
        id: &StoryId,
        action: ModerationAction,
    ) -> Result<Story, AppError> {
        for _ in 0..MAX_MODERATION_RETRIES {
            let story = self
                .stories
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::Domain(DomainError::NotFound(id.to_string())))?;

            let next = story.status.apply(action);

            // No-op transition, nothing to write
            if next == story.status {
                return Ok(story);
            }

            let updated = self
                .stories
                .update_status_from(id, story.status, next)
                .await?;

            if updated {
                tracing::info!(
                    story_id = %id,
                    action = %action,
                    from = %story.status,
                    to = %next,
                    "Story moderated"
                );
                return Ok(Story {
                    status: next,
                    ..story
                });
            }

            tracing::debug!(story_id = %id, "Concurrent status update, re-reading");
        }

        Err(AppError::Domain(DomainError::Conflict(format!(
            "story {} was updated concurrently, retry the action",
            id
        ))))
    }
}
