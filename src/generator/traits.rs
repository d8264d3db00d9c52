//! Trait abstraction for policy generation to enable mocking in tests

use crate::policy::{GeneratedDocument, PolicyType};
use async_trait::async_trait;
use thiserror::Error;

/// A validated generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRequest {
    /// Trimmed business name, substituted into the template
    pub business_name: String,
    pub policy_type: PolicyType,
    /// Trimmed free-text description; templates do not read it
    pub business_description: String,
}

/// Failure while producing a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("generation task failed: {0}")]
    TaskFailed(String),
}

/// Produces a document for a validated request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PolicyGenerator: Send + Sync {
    async fn generate(&self, request: PolicyRequest) -> Result<GeneratedDocument, GenerationError>;
}
