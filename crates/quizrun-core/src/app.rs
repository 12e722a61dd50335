//! Command dispatch for a quiz front end.
//!
//! A front end turns user input into [`Command`]s and feeds them to
//! [`QuizApp::dispatch`]. Each accepted command returns the [`Snapshot`]
//! the display should show next; the core never reads back from the
//! display.

use serde::Serialize;

use crate::error::QuizError;
use crate::model::QuestionId;
use crate::scoring::{score, ResultReport};
use crate::selection::{SelectionSummary, SelectionTracker};
use crate::session::{Direction, QuestionView, QuizSession, SessionEvent, SessionState};
use crate::store::{BankStore, SetSummary};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleSet { index: usize, selected: bool },
    StartQuiz,
    Navigate(Direction),
    SelectAnswer { question_id: QuestionId, letter: String },
    Submit,
    /// Return to set selection, clearing the selection and any session.
    Reset,
}

/// State pushed to the display after a command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", content = "data", rename_all = "snake_case")]
pub enum Snapshot {
    /// Set-selection screen. Empty when no bank loaded.
    Sets(Vec<SetSummary>),
    Selection(SelectionSummary),
    Question(QuestionView),
    Results(ResultReport),
}

/// Receives snapshots to render.
pub trait DisplaySurface {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Owns the store, selection and current session of one front end.
#[derive(Debug)]
pub struct QuizApp {
    store: BankStore,
    selection: SelectionTracker,
    session: QuizSession,
    report: Option<ResultReport>,
}

impl QuizApp {
    pub fn new(store: BankStore) -> Self {
        Self {
            store,
            selection: SelectionTracker::new(),
            session: QuizSession::new(),
            report: None,
        }
    }

    /// The set-selection screen.
    pub fn sets_snapshot(&self) -> Snapshot {
        Snapshot::Sets(self.store.summaries())
    }

    /// Apply one command.
    ///
    /// Rejected commands leave every piece of state unchanged.
    pub fn dispatch(&mut self, command: Command) -> Result<Snapshot, QuizError> {
        tracing::debug!(?command, state = %self.session.state(), "dispatch");

        match command {
            Command::ToggleSet { index, selected } => {
                self.selection.toggle(&self.store, index, selected)?;
                Ok(Snapshot::Selection(self.selection.summary(&self.store)))
            }
            Command::StartQuiz => {
                if !self.selection.summary(&self.store).can_start {
                    return Err(QuizError::EmptySelection);
                }
                let questions = self.selection.flatten(&self.store)?;

                let mut session = QuizSession::new();
                let view = session.start(questions)?;
                self.session = session;
                self.report = None;
                Ok(Snapshot::Question(view))
            }
            Command::Navigate(direction) => match self.session.navigate(direction)? {
                SessionEvent::Render(view) => Ok(Snapshot::Question(view)),
                SessionEvent::Submitted => self.finish(),
            },
            Command::SelectAnswer {
                question_id,
                letter,
            } => self
                .session
                .record_answer(&question_id, &letter)
                .map(Snapshot::Question),
            Command::Submit => {
                self.session.submit()?;
                self.finish()
            }
            Command::Reset => {
                self.selection.reset();
                self.session = QuizSession::new();
                self.report = None;
                Ok(self.sets_snapshot())
            }
        }
    }

    /// Apply one command and push the resulting snapshot to `surface`.
    pub fn dispatch_to(
        &mut self,
        command: Command,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), QuizError> {
        let snapshot = self.dispatch(command)?;
        surface.render(&snapshot);
        Ok(())
    }

    fn finish(&mut self) -> Result<Snapshot, QuizError> {
        let report = score(&self.session)?;
        self.report = Some(report.clone());
        Ok(Snapshot::Results(report))
    }

    pub fn store(&self) -> &BankStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Report of the last completed session, until the next start or reset.
    pub fn report(&self) -> Option<&ResultReport> {
        self.report.as_ref()
    }
}
