//! Dispatches each locator to the provider that understands it.

use async_trait::async_trait;

use quizrun_core::error::LoadError;
use quizrun_core::model::QuestionSet;
use quizrun_core::traits::BankProvider;

use crate::file::FileProvider;
use crate::http::HttpProvider;

/// Sends `http://` and `https://` locators to HTTP, everything else to the
/// filesystem.
pub struct SourceRouter {
    file: FileProvider,
    http: HttpProvider,
}

impl SourceRouter {
    pub fn new(file: FileProvider, http: HttpProvider) -> Self {
        Self { file, http }
    }

    fn is_remote(locator: &str) -> bool {
        locator.starts_with("http://") || locator.starts_with("https://")
    }
}

#[async_trait]
impl BankProvider for SourceRouter {
    fn name(&self) -> &str {
        "router"
    }

    async fn fetch(&self, locator: &str) -> Result<QuestionSet, LoadError> {
        if Self::is_remote(locator) {
            self.http.fetch(locator).await
        } else {
            self.file.fetch(locator).await
        }
    }
}
