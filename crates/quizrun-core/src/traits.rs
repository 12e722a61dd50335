//! Collaborator traits for fetching question banks.
//!
//! Concrete providers (files, HTTP) live in `quizrun-providers`.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::model::QuestionSet;

/// A source of parsed question banks.
#[async_trait]
pub trait BankProvider: Send + Sync {
    /// Human-readable provider name (e.g. "file").
    fn name(&self) -> &str;

    /// Retrieve and parse the bank at `locator`.
    async fn fetch(&self, locator: &str) -> Result<QuestionSet, LoadError>;
}
