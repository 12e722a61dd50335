//! Error types for bank loading and quiz sessions.
//!
//! Neither kind is fatal: load errors skip one source, and session errors
//! reject a single command while leaving state untouched.

use thiserror::Error;

use crate::model::QuestionId;
use crate::session::SessionState;

/// Errors raised by selection and session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A quiz was started with no questions selected.
    #[error("no questions selected")]
    EmptySelection,

    /// A bank index outside the loaded store.
    #[error("bank index {index} out of range ({len} banks loaded)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An answer was recorded for a question that is not in the session.
    #[error("question {0} is not part of this session")]
    UnknownQuestion(QuestionId),

    /// The operation is not valid in the session's current state.
    #[error("cannot {action} while session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },

    /// Scoring was requested before the session was submitted.
    #[error("session has not been submitted")]
    NotCompleted,
}

/// Per-source failure while loading a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be retrieved.
    #[error("failed to fetch {source_name}: {message}")]
    Fetch {
        source_name: String,
        message: String,
    },

    /// The source was retrieved but is not a valid question bank.
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// A question id repeats one already loaded.
    #[error("{source_name}: duplicate question id {id}")]
    DuplicateQuestionId { source_name: String, id: QuestionId },
}

impl LoadError {
    /// The locator of the source that failed.
    pub fn source_name(&self) -> &str {
        match self {
            LoadError::Fetch { source_name, .. }
            | LoadError::Parse { source_name, .. }
            | LoadError::DuplicateQuestionId { source_name, .. } => source_name,
        }
    }
}
