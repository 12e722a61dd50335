//! Question bank store.
//!
//! Holds every bank that loaded successfully, in source order. Sources are
//! fetched concurrently and each one succeeds or fails on its own.

use std::collections::HashSet;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, QuizError};
use crate::model::{QuestionId, QuestionSet};
use crate::traits::BankProvider;

/// A loaded bank as shown on the set-selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSummary {
    pub index: usize,
    pub name: String,
    pub question_count: usize,
}

/// The immutable collection of loaded question banks.
#[derive(Debug, Default)]
pub struct BankStore {
    sets: Vec<QuestionSet>,
    failures: Vec<LoadError>,
    seen_ids: HashSet<QuestionId>,
}

impl BankStore {
    /// Fetch every source through `provider` and keep the ones that load.
    ///
    /// All fetches are awaited before aggregation, so the resulting order
    /// always follows `sources` regardless of completion order.
    pub async fn load<S: AsRef<str>>(provider: &dyn BankProvider, sources: &[S]) -> Self {
        let fetches = sources.iter().map(|s| provider.fetch(s.as_ref()));
        let results = join_all(fetches).await;

        let mut store = Self::default();
        for (source, result) in sources.iter().zip(results) {
            match result {
                Ok(set) => store.accept(source.as_ref(), set),
                Err(e) => store.reject(e),
            }
        }

        if store.is_empty() {
            tracing::warn!("no question banks loaded from {} source(s)", sources.len());
        } else {
            tracing::info!(
                "loaded {} question bank(s) ({} questions), {} failed",
                store.len(),
                store.total_questions(),
                store.failures.len()
            );
        }

        store
    }

    /// Build a store from already parsed sets, applying the same
    /// duplicate-id rejection as [`BankStore::load`].
    pub fn from_sets(sets: impl IntoIterator<Item = QuestionSet>) -> Self {
        let mut store = Self::default();
        for set in sets {
            let name = set.name.clone();
            store.accept(&name, set);
        }
        store
    }

    fn accept(&mut self, source_name: &str, set: QuestionSet) {
        let mut set_ids = HashSet::new();
        for question in &set.questions {
            if self.seen_ids.contains(&question.id) || !set_ids.insert(&question.id) {
                self.reject(LoadError::DuplicateQuestionId {
                    source_name: source_name.to_string(),
                    id: question.id.clone(),
                });
                return;
            }
        }

        self.seen_ids
            .extend(set.questions.iter().map(|q| q.id.clone()));
        tracing::debug!("accepted bank '{}' from {source_name}", set.name);
        self.sets.push(set);
    }

    fn reject(&mut self, error: LoadError) {
        tracing::warn!(source = error.source_name(), "skipping source: {error}");
        self.failures.push(error);
    }

    /// Number of loaded banks.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True when no bank loaded; the caller shows an empty state.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The bank at `index`.
    pub fn get(&self, index: usize) -> Result<&QuestionSet, QuizError> {
        self.sets.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.sets.len(),
        })
    }

    /// Question count of the bank at `index`.
    pub fn count(&self, index: usize) -> Result<usize, QuizError> {
        self.get(index).map(QuestionSet::len)
    }

    pub fn total_questions(&self) -> usize {
        self.sets.iter().map(QuestionSet::len).sum()
    }

    pub fn sets(&self) -> &[QuestionSet] {
        &self.sets
    }

    /// Sources that were skipped during loading.
    pub fn failures(&self) -> &[LoadError] {
        &self.failures
    }

    /// Index, name and question count of every bank.
    pub fn summaries(&self) -> Vec<SetSummary> {
        self.sets
            .iter()
            .enumerate()
            .map(|(index, set)| SetSummary {
                index,
                name: set.name.clone(),
                question_count: set.len(),
            })
            .collect()
    }
}
