//! Selection tracker for the set-selection screen.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::Question;
use crate::store::BankStore;

/// What the start button needs to know about the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub selected_sets: usize,
    pub total_questions: usize,
    pub can_start: bool,
}

impl SelectionSummary {
    /// "1 question selected" / "N questions selected".
    pub fn label(&self) -> String {
        let plural = if self.total_questions == 1 { "" } else { "s" };
        format!("{} question{plural} selected", self.total_questions)
    }
}

/// The set of chosen bank indices.
///
/// Indices are kept in the order they were selected; that order is the
/// order banks are flattened into a session. Deselecting and reselecting a
/// bank moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: IndexSet<usize>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `index`. Repeating the current state is a no-op.
    pub fn toggle(
        &mut self,
        store: &BankStore,
        index: usize,
        selected: bool,
    ) -> Result<(), QuizError> {
        if index >= store.len() {
            return Err(QuizError::IndexOutOfRange {
                index,
                len: store.len(),
            });
        }

        if selected {
            self.selected.insert(index);
        } else {
            self.selected.shift_remove(&index);
        }
        Ok(())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in selection order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Sum of question counts over the selected banks.
    pub fn total_selected_questions(&self, store: &BankStore) -> usize {
        self.indices()
            .filter_map(|i| store.count(i).ok())
            .sum()
    }

    pub fn summary(&self, store: &BankStore) -> SelectionSummary {
        let total_questions = self.total_selected_questions(store);
        SelectionSummary {
            selected_sets: self.selected.len(),
            total_questions,
            can_start: total_questions > 0,
        }
    }

    /// Questions of every selected bank, concatenated in selection order.
    pub fn flatten(&self, store: &BankStore) -> Result<Vec<Question>, QuizError> {
        let mut questions = Vec::with_capacity(self.total_selected_questions(store));
        for index in self.indices() {
            questions.extend(store.get(index)?.questions.iter().cloned());
        }
        Ok(questions)
    }

    /// Clear all selections.
    pub fn reset(&mut self) {
        self.selected.clear();
    }
}
