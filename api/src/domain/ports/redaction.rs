//! Redaction port
//!
//! Sensitive-content redaction is an external text-processing service.
//! Intake only validates submission shape; the redactor runs over the
//! normalized draft before it reaches the store.

use async_trait::async_trait;

use crate::domain::entities::NewStory;
use crate::error::DomainError;

/// Client for the redaction collaborator
#[async_trait]
pub trait Redactor: Send + Sync {
    /// Redact sensitive content from a draft, returning the cleaned draft
    async fn redact(&self, draft: NewStory) -> Result<NewStory, DomainError>;
}
