//! Quiz session state machine.
//!
//! A session moves `NotStarted -> InProgress(index) -> Completed`. Every
//! accepted transition hands back what the display should show next.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{Question, QuestionId};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    InProgress { index: usize },
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::NotStarted => write!(f, "not started"),
            SessionState::InProgress { index } => write!(f, "in progress at question {}", index + 1),
            SessionState::Completed => write!(f, "completed"),
        }
    }
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Back,
    Forward,
}

impl TryFrom<i32> for Direction {
    type Error = String;

    fn try_from(step: i32) -> Result<Self, Self::Error> {
        match step {
            -1 => Ok(Direction::Back),
            1 => Ok(Direction::Forward),
            other => Err(format!("invalid navigation step: {other}")),
        }
    }
}

/// Label of the forward navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextLabel {
    Next,
    Submit,
}

impl fmt::Display for NextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextLabel::Next => write!(f, "Next"),
            NextLabel::Submit => write!(f, "Submit"),
        }
    }
}

/// One choice as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    pub letter: String,
    pub text: String,
    pub selected: bool,
}

/// Snapshot of the current question for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionView {
    pub question_id: QuestionId,
    /// 1-based position.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub choices: Vec<ChoiceView>,
    /// Fraction of the quiz reached, `number / total`.
    pub progress: f64,
    pub prev_enabled: bool,
    pub next_label: NextLabel,
}

impl QuestionView {
    /// "Question 3 of 10".
    pub fn counter(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    pub fn selected_letter(&self) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.selected)
            .map(|c| c.letter.as_str())
    }
}

/// Outcome of a navigation step.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The session is still running; show this question.
    Render(QuestionView),
    /// Forward from the last question submitted the quiz.
    Submitted,
}

/// One run through a flattened list of questions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    state: SessionState,
    answers: HashMap<QuestionId, String>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            state: SessionState::NotStarted,
            answers: HashMap::new(),
        }
    }

    /// Begin a run over `questions` at the first question.
    ///
    /// A completed session may be started again; prior answers are
    /// discarded. A session already in progress cannot be restarted.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<QuestionView, QuizError> {
        if let SessionState::InProgress { .. } = self.state {
            return Err(self.invalid("start"));
        }
        if questions.is_empty() {
            return Err(QuizError::EmptySelection);
        }

        tracing::debug!("starting session with {} question(s)", questions.len());
        self.questions = questions;
        self.answers.clear();
        self.state = SessionState::InProgress { index: 0 };
        self.view_at(0)
    }

    /// Record `letter` as the answer to `question_id`, replacing any prior
    /// answer. The letter is not checked against the question's choices.
    pub fn record_answer(
        &mut self,
        question_id: &QuestionId,
        letter: &str,
    ) -> Result<QuestionView, QuizError> {
        let index = self.current_index_or("record an answer")?;
        if !self.questions.iter().any(|q| &q.id == question_id) {
            return Err(QuizError::UnknownQuestion(question_id.clone()));
        }

        self.answers.insert(question_id.clone(), letter.to_string());
        self.view_at(index)
    }

    /// Record `letter` for the question currently shown.
    pub fn answer_current(&mut self, letter: &str) -> Result<QuestionView, QuizError> {
        let index = self.current_index_or("record an answer")?;
        let id = self.questions[index].id.clone();
        self.record_answer(&id, letter)
    }

    /// Move one question back or forward.
    ///
    /// Forward from the last question submits. Back from the first question
    /// stays put.
    pub fn navigate(&mut self, direction: Direction) -> Result<SessionEvent, QuizError> {
        let index = self.current_index_or("navigate")?;
        let last = self.questions.len() - 1;

        let next = match direction {
            Direction::Forward if index == last => {
                self.submit()?;
                return Ok(SessionEvent::Submitted);
            }
            Direction::Forward => (index + 1).min(last),
            Direction::Back => index.saturating_sub(1),
        };

        self.state = SessionState::InProgress { index: next };
        self.view_at(next).map(SessionEvent::Render)
    }

    /// Finish the run. Unanswered questions stay unanswered.
    pub fn submit(&mut self) -> Result<(), QuizError> {
        self.current_index_or("submit")?;
        tracing::debug!(
            "session submitted with {}/{} answered",
            self.answers.len(),
            self.questions.len()
        );
        self.state = SessionState::Completed;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { index } => Some(index),
            _ => None,
        }
    }

    /// The question being shown, while in progress.
    pub fn current_view(&self) -> Option<QuestionView> {
        self.current_index().and_then(|i| self.view_at(i).ok())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    fn current_index_or(&self, action: &'static str) -> Result<usize, QuizError> {
        self.current_index().ok_or_else(|| self.invalid(action))
    }

    fn invalid(&self, action: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            action,
            state: self.state,
        }
    }

    fn view_at(&self, index: usize) -> Result<QuestionView, QuizError> {
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            })?;
        let total = self.questions.len();
        let selected = self.answer_for(&question.id);

        Ok(QuestionView {
            question_id: question.id.clone(),
            number: index + 1,
            total,
            prompt: question.prompt.clone(),
            choices: question
                .choices
                .iter()
                .map(|(letter, text)| ChoiceView {
                    letter: letter.clone(),
                    text: text.clone(),
                    selected: selected == Some(letter.as_str()),
                })
                .collect(),
            progress: (index + 1) as f64 / total as f64,
            prev_enabled: index > 0,
            next_label: if index + 1 == total {
                NextLabel::Submit
            } else {
                NextLabel::Next
            },
        })
    }
}
