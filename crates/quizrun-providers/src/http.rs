//! HTTP provider for banks served as static JSON.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::instrument;

use quizrun_core::error::LoadError;
use quizrun_core::model::QuestionSet;
use quizrun_core::parser::parse_question_set_str;
use quizrun_core::traits::BankProvider;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches bank JSON over HTTP(S).
pub struct HttpProvider {
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BankProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, locator: &str) -> Result<QuestionSet, LoadError> {
        let fetch_error = |message: String| LoadError::Fetch {
            source_name: locator.to_string(),
            message,
        };

        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        parse_question_set_str(&body, locator)
    }
}
