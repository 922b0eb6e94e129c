//! Redaction adapter
//!
//! The real redaction service lives outside this API. The no-op adapter
//! passes drafts through unchanged so intake can be wired the same way in
//! every environment.

use async_trait::async_trait;

use crate::domain::entities::NewStory;
use crate::domain::ports::Redactor;
use crate::error::DomainError;

/// Pass-through redactor
pub struct NoopRedactor;

#[async_trait]
impl Redactor for NoopRedactor {
    async fn redact(&self, draft: NewStory) -> Result<NewStory, DomainError> {
        Ok(draft)
    }
}
