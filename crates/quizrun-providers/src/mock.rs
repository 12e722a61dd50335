//! Mock provider for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizrun_core::error::LoadError;
use quizrun_core::model::QuestionSet;
use quizrun_core::traits::BankProvider;

/// A provider serving banks from memory.
///
/// Locators without a registered bank fail with a fetch error.
pub struct MockProvider {
    banks: HashMap<String, QuestionSet>,
    call_count: AtomicU32,
    requested: Mutex<Vec<String>>,
}

impl MockProvider {
    /// Create a mock with the given locator→bank mappings.
    pub fn new(banks: HashMap<String, QuestionSet>) -> Self {
        Self {
            banks,
            call_count: AtomicU32::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Number of fetches made.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Locators fetched so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl BankProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, locator: &str) -> Result<QuestionSet, LoadError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(locator.to_string());
        }

        self.banks.get(locator).cloned().ok_or_else(|| LoadError::Fetch {
            source_name: locator.to_string(),
            message: "no such mock bank".into(),
        })
    }
}
