//! Local file provider.

use async_trait::async_trait;

use quizrun_core::error::LoadError;
use quizrun_core::model::QuestionSet;
use quizrun_core::parser::parse_question_set_str;
use quizrun_core::traits::BankProvider;

/// Reads bank JSON files from the local filesystem.
#[derive(Debug, Default, Clone)]
pub struct FileProvider;

impl FileProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BankProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, locator: &str) -> Result<QuestionSet, LoadError> {
        let path = locator.strip_prefix("file://").unwrap_or(locator);
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::Fetch {
                source_name: locator.to_string(),
                message: e.to_string(),
            })?;

        parse_question_set_str(&content, locator)
    }
}
