//! JSON question bank parser.
//!
//! Parses bank files of the form
//! `{ "set_name": ..., "questions": [{ "id", "question", "choices", "correct_answer", "explanation" }] }`
//! and validates them for data-integrity issues.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::LoadError;
use crate::model::{QuestionId, QuestionSet};

/// Parse a bank from a JSON string. `source_name` is used in errors.
pub fn parse_question_set_str(content: &str, source_name: &str) -> Result<QuestionSet, LoadError> {
    let mut set: QuestionSet = serde_json::from_str(content).map_err(|e| LoadError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;

    // Blank rationales are treated as absent.
    for question in &mut set.questions {
        if question
            .explanation
            .as_ref()
            .is_some_and(|e| e.trim().is_empty())
        {
            question.explanation = None;
        }
    }

    Ok(set)
}

/// Read and parse a single bank file.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    Ok(parse_question_set_str(&content, &path.display().to_string())?)
}

/// List the `.json` bank files in a directory, sorted by file name.
pub fn find_bank_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<QuestionId>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for data-integrity issues.
///
/// None of these block loading; a question whose answer is not among its
/// choices is still playable and simply never scores.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "set has no questions".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for question in &set.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in &set.questions {
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question text is empty".into(),
            });
        }

        if question.choices.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question has no choices".into(),
            });
        } else if !question.has_valid_answer() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!(
                    "correct answer '{}' is not one of the choices",
                    question.correct_answer
                ),
            });
        }
    }

    warnings
}
