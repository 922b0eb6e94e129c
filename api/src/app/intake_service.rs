//! Submission intake service
//!
//! Validates and normalizes a raw submission into a creatable story draft.
//! Intake checks shape only; content safety belongs to the redaction
//! collaborator, which runs over the draft before it reaches the store.

use std::sync::Arc;

use crate::domain::entities::{NewStory, Story};
use crate::domain::ports::{Redactor, StoryRepository};
use crate::error::{AppError, FieldError};

/// A raw story submission from the public intake boundary
#[derive(Debug, Clone)]
pub struct StorySubmission {
    pub title: String,
    pub author: String,
    pub body: String,
    pub category: String,
    pub ai_tool: String,
    pub outcome_type: Option<String>,
}

/// Service for turning submissions into pending stories
pub struct IntakeService<SR, RD>
where
    SR: StoryRepository,
    RD: Redactor,
{
    stories: Arc<SR>,
    redactor: Arc<RD>,
}

impl<SR, RD> IntakeService<SR, RD>
where
    SR: StoryRepository,
    RD: Redactor,
{
    pub fn new(stories: Arc<SR>, redactor: Arc<RD>) -> Self {
        Self { stories, redactor }
    }

    /// Validate a submission. Returns one error per failing required field.
    pub fn validate(submission: &StorySubmission) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let required: [(&'static str, &str); 5] = [
            ("title", &submission.title),
            ("author", &submission.author),
            ("body", &submission.body),
            ("category", &submission.category),
            ("ai_tool", &submission.ai_tool),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    message: format!("{} must not be empty", field),
                });
            }
        }

        errors
    }

    /// Validate, normalize and store a submission. The created story always
    /// enters the store as pending.
    pub async fn submit(&self, submission: StorySubmission) -> Result<Story, AppError> {
        let errors = Self::validate(&submission);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let draft = NewStory {
            title: submission.title.trim().to_string(),
            author: submission.author.trim().to_string(),
            body: submission.body.trim().to_string(),
            category: submission.category.trim().to_string(),
            ai_tool: submission.ai_tool.trim().to_string(),
            outcome_type: submission
                .outcome_type
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty()),
        };

        let draft = self.redactor.redact(draft).await?;
        let story = self.stories.create(&draft).await?;

        tracing::info!(story_id = %story.id, "Story submitted for review");

        Ok(story)
    }
}
