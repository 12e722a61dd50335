//! Scoring of completed sessions and the result report.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::{Choices, QuestionId};
use crate::session::QuizSession;

/// What the user answered for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAnswer {
    Answered(String),
    /// Never equal to any letter-label.
    NoAnswer,
}

impl UserAnswer {
    pub fn letter(&self) -> Option<&str> {
        match self {
            UserAnswer::Answered(letter) => Some(letter),
            UserAnswer::NoAnswer => None,
        }
    }
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAnswer::Answered(letter) => f.write_str(letter),
            UserAnswer::NoAnswer => f.write_str("No answer"),
        }
    }
}

/// Outcome for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: QuestionId,
    pub prompt: String,
    pub choices: Choices,
    pub user_answer: UserAnswer,
    pub correct_answer: String,
    pub is_correct: bool,
    /// Carried regardless of correctness; see [`ExplanationPolicy`].
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionResult {
    /// "B) text of choice B", or "No answer".
    pub fn user_answer_text(&self) -> String {
        match &self.user_answer {
            UserAnswer::Answered(letter) => self.letter_text(letter),
            UserAnswer::NoAnswer => self.user_answer.to_string(),
        }
    }

    pub fn correct_answer_text(&self) -> String {
        self.letter_text(&self.correct_answer)
    }

    fn letter_text(&self, letter: &str) -> String {
        match self.choices.get(letter) {
            Some(text) => format!("{letter}) {text}"),
            None => letter.to_string(),
        }
    }
}

/// The scored result of one completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultReport {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the session was scored.
    pub completed_at: DateTime<Utc>,
    pub correct_count: usize,
    pub total_count: usize,
    /// Rounded half-up percentage of correct answers.
    pub percentage: u32,
    /// Results in session order.
    pub per_question: Vec<QuestionResult>,
}

impl ResultReport {
    pub fn incorrect(&self) -> impl Iterator<Item = &QuestionResult> {
        self.per_question.iter().filter(|r| !r.is_correct)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ResultReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

/// When a result view shows a question's explanation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationPolicy {
    /// Only for questions answered incorrectly.
    #[default]
    Incorrect,
    Always,
    Never,
}

impl ExplanationPolicy {
    /// The explanation to display for `result`, if any.
    pub fn explanation_for<'a>(&self, result: &'a QuestionResult) -> Option<&'a str> {
        let show = match self {
            ExplanationPolicy::Incorrect => !result.is_correct,
            ExplanationPolicy::Always => true,
            ExplanationPolicy::Never => false,
        };
        if show {
            result.explanation.as_deref()
        } else {
            None
        }
    }
}

/// `round(100 * correct / total)` with halves rounded up, in integers.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

/// Score a completed session.
pub fn score(session: &QuizSession) -> Result<ResultReport, QuizError> {
    if !session.is_completed() {
        return Err(QuizError::NotCompleted);
    }

    let per_question: Vec<QuestionResult> = session
        .questions()
        .iter()
        .map(|question| {
            let user_answer = match session.answer_for(&question.id) {
                Some(letter) => UserAnswer::Answered(letter.to_string()),
                None => UserAnswer::NoAnswer,
            };
            let is_correct = user_answer.letter() == Some(question.correct_answer.as_str());

            QuestionResult {
                question_id: question.id.clone(),
                prompt: question.prompt.clone(),
                choices: question.choices.clone(),
                user_answer,
                correct_answer: question.correct_answer.clone(),
                is_correct,
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct_count = per_question.iter().filter(|r| r.is_correct).count();
    let total_count = per_question.len();
    let percentage = percentage(correct_count, total_count);

    tracing::info!("scored session: {correct_count}/{total_count} ({percentage}%)");

    Ok(ResultReport {
        id: Uuid::new_v4(),
        completed_at: Utc::now(),
        correct_count,
        total_count,
        percentage,
        per_question,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Direction;
    use crate::store::tests::{bank, question};

    fn session_over(questions: &[(&str, &str)]) -> QuizSession {
        let mut session = QuizSession::new();
        session.start(bank("S", questions).questions).unwrap();
        session
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn scoring_requires_completed_session() {
        let session = session_over(&[("q1", "A")]);
        assert_eq!(score(&session).unwrap_err(), QuizError::NotCompleted);
        assert_eq!(
            score(&QuizSession::new()).unwrap_err(),
            QuizError::NotCompleted
        );
    }

    #[test]
    fn unanswered_submit_scores_zero() {
        let mut session = session_over(&[("q1", "A"), ("q2", "B"), ("q3", "C")]);
        session.submit().unwrap();

        let report = score(&session).unwrap();
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.total_count, 3);
        assert_eq!(report.percentage, 0);
        assert!(report
            .per_question
            .iter()
            .all(|r| r.user_answer == UserAnswer::NoAnswer && !r.is_correct));
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let mut session = session_over(&[("q1", "A"), ("q2", "D"), ("q3", "C")]);
        let answers: Vec<_> = session
            .questions()
            .iter()
            .map(|q| (q.id.clone(), q.correct_answer.clone()))
            .collect();
        for (id, letter) in &answers {
            session.record_answer(id, letter).unwrap();
        }
        session.submit().unwrap();

        let report = score(&session).unwrap();
        assert_eq!(report.correct_count, report.total_count);
        assert_eq!(report.percentage, 100);
        assert_eq!(report.incorrect().count(), 0);
    }

    #[test]
    fn forward_submit_reports_flattened_count() {
        let mut session = QuizSession::new();
        let mut questions = bank("A", &[("a1", "A"), ("a2", "B")]).questions;
        questions.extend(bank("B", &[("b1", "C")]).questions);
        session.start(questions).unwrap();

        session.navigate(Direction::Forward).unwrap();
        session.navigate(Direction::Forward).unwrap();
        session.navigate(Direction::Forward).unwrap();
        assert!(session.is_completed());

        let report = score(&session).unwrap();
        assert_eq!(report.total_count, 3);
    }

    #[test]
    fn answer_key_outside_choices_never_scores() {
        let mut session = QuizSession::new();
        session.start(vec![question("odd", "E")]).unwrap();
        for letter in ["A", "B", "C", "D"] {
            session.answer_current(letter).unwrap();
        }
        session.submit().unwrap();

        let report = score(&session).unwrap();
        assert!(!report.per_question[0].is_correct);
        assert_eq!(report.per_question[0].correct_answer_text(), "E");
    }

    #[test]
    fn explanation_policy_filters() {
        let mut session = session_over(&[("q1", "A"), ("q2", "B")]);
        session.answer_current("A").unwrap();
        session.submit().unwrap();
        let report = score(&session).unwrap();

        let right = &report.per_question[0];
        let wrong = &report.per_question[1];
        assert_eq!(ExplanationPolicy::Incorrect.explanation_for(right), None);
        assert_eq!(
            ExplanationPolicy::Incorrect.explanation_for(wrong),
            Some("because B")
        );
        assert_eq!(
            ExplanationPolicy::Always.explanation_for(right),
            Some("because A")
        );
        assert_eq!(ExplanationPolicy::Never.explanation_for(wrong), None);
    }

    #[test]
    fn answer_texts_include_choice() {
        let mut session = session_over(&[("q1", "A"), ("q2", "B")]);
        session.answer_current("C").unwrap();
        session.submit().unwrap();
        let report = score(&session).unwrap();

        assert_eq!(report.per_question[0].user_answer_text(), "C) choice C");
        assert_eq!(report.per_question[0].correct_answer_text(), "A) choice A");
        assert_eq!(report.per_question[1].user_answer_text(), "No answer");
    }

    #[test]
    fn report_json_persistence() {
        let mut session = session_over(&[("q1", "A")]);
        session.answer_current("A").unwrap();
        session.submit().unwrap();
        let report = score(&session).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");
        report.save_json(&path).unwrap();

        let loaded = ResultReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.percentage, 100);
        assert_eq!(loaded.per_question, report.per_question);
    }
}
