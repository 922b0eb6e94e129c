//! Mock implementations of port traits
//!
//! In-memory implementations that store data behind an `RwLock`. The write
//! lock serializes status updates per record, mirroring the conditional
//! UPDATE the Postgres adapter issues.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewStory, Story, StoryId, StoryStatus};
use crate::domain::ports::{Redactor, StoryRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Story Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryStoryRepository {
    stories: Arc<RwLock<HashMap<StoryId, Story>>>,
}

impl InMemoryStoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a story for testing
    pub fn with_story(self, story: Story) -> Self {
        {
            let mut stories = self.stories.write().unwrap();
            stories.insert(story.id, story);
        }
        self
    }

    /// Synchronous read for test assertions
    pub fn find_by_id_sync(&self, id: &StoryId) -> Option<Story> {
        self.stories.read().unwrap().get(id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.read().unwrap().is_empty()
    }

    pub fn len(&self) -> usize {
        self.stories.read().unwrap().len()
    }
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepository {
    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError> {
        let stories = self.stories.read().unwrap();
        Ok(stories.get(id).cloned())
    }

    async fn create(&self, story: &NewStory) -> Result<Story, DomainError> {
        let created = Story {
            id: StoryId::new(),
            status: StoryStatus::Pending,
            author: story.author.clone(),
            title: story.title.clone(),
            body: story.body.clone(),
            category: story.category.clone(),
            ai_tool: story.ai_tool.clone(),
            outcome_type: story.outcome_type.clone(),
            created_at: Utc::now(),
        };

        let mut stories = self.stories.write().unwrap();
        stories.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update_status_from(
        &self,
        id: &StoryId,
        expected: StoryStatus,
        next: StoryStatus,
    ) -> Result<bool, DomainError> {
        let mut stories = self.stories.write().unwrap();

        match stories.get_mut(id) {
            Some(story) if story.status == expected => {
                story.status = next;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_by_status(
        &self,
        status: StoryStatus,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Story>, DomainError> {
        let stories = self.stories.read().unwrap();

        let mut matching: Vec<Story> = stories
            .values()
            .filter(|s| s.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_by_status(&self, status: StoryStatus) -> Result<u64, DomainError> {
        let stories = self.stories.read().unwrap();
        Ok(stories.values().filter(|s| s.status == status).count() as u64)
    }
}

// ============================================================================
// Unavailable Story Repository
// ============================================================================

/// Repository whose every operation fails as if the store were unreachable
pub struct UnavailableStoryRepository;

#[async_trait]
impl StoryRepository for UnavailableStoryRepository {
    async fn find_by_id(&self, _id: &StoryId) -> Result<Option<Story>, DomainError> {
        Err(DomainError::Unavailable("store offline".to_string()))
    }

    async fn create(&self, _story: &NewStory) -> Result<Story, DomainError> {
        Err(DomainError::Unavailable("store offline".to_string()))
    }

    async fn update_status_from(
        &self,
        _id: &StoryId,
        _expected: StoryStatus,
        _next: StoryStatus,
    ) -> Result<bool, DomainError> {
        Err(DomainError::Unavailable("store offline".to_string()))
    }

    async fn list_by_status(
        &self,
        _status: StoryStatus,
        _limit: u64,
        _offset: u64,
    ) -> Result<Vec<Story>, DomainError> {
        Err(DomainError::Unavailable("store offline".to_string()))
    }

    async fn count_by_status(&self, _status: StoryStatus) -> Result<u64, DomainError> {
        Err(DomainError::Unavailable("store offline".to_string()))
    }
}

// ============================================================================
// Mock Redactor
// ============================================================================

/// Redactor that replaces a configured needle with `[redacted]`
pub struct MockRedactor {
    needle: String,
}

impl MockRedactor {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_string(),
        }
    }
}

#[async_trait]
impl Redactor for MockRedactor {
    async fn redact(&self, draft: NewStory) -> Result<NewStory, DomainError> {
        Ok(NewStory {
            body: draft.body.replace(&self.needle, "[redacted]"),
            ..draft
        })
    }
}
