//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewStory, Story, StoryId, StoryStatus};
use crate::error::DomainError;

/// Repository for Story entities
///
/// Updates against a single id must be linearizable: the conditional
/// `update_status_from` lets callers detect a concurrent writer and
/// recompute the transition from the status actually in the store.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Find a story by ID
    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError>;

    /// Create a new story: assigns an id, sets status to pending and stamps
    /// the creation time
    async fn create(&self, story: &NewStory) -> Result<Story, DomainError>;

    /// Overwrite the status field, but only if the stored status still
    /// equals `expected`. Returns `false` when a concurrent update changed
    /// the row first (or the id is unknown); no other field is touched.
    async fn update_status_from(
        &self,
        id: &StoryId,
        expected: StoryStatus,
        next: StoryStatus,
    ) -> Result<bool, DomainError>;

    /// List stories with the given status, most-recent-first by creation time
    async fn list_by_status(
        &self,
        status: StoryStatus,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Story>, DomainError>;

    /// Count stories with the given status
    async fn count_by_status(&self, status: StoryStatus) -> Result<u64, DomainError>;
}
