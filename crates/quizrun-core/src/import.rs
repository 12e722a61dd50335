//! Import of College Board style question dumps.
//!
//! Takes text already extracted from a question PDF, in the layout
//!
//! ```text
//! Question ID 3a4b5c
//! ID: 3a4b5c
//! Which choice completes the text ...
//! A. first choice
//! B. second choice
//! C. third choice
//! D. fourth choice
//! ID: 3a4b5c Answer
//! Correct Answer: B
//! Rationale
//! Choice B is the best answer because ...
//! Question Difficulty: Medium
//! ```
//!
//! and turns it into a [`QuestionSet`] with sequential integer ids.

use anyhow::Result;
use regex::Regex;

use crate::model::{Choices, Question, QuestionId, QuestionSet};

const ANSWER_SECTION_MARKERS: [&str; 2] = ["\nID:", "\nCorrect Answer:"];
const RATIONALE_END_MARKERS: [&str; 2] = ["Question Difficulty:", "Assessment"];

struct DumpPatterns {
    block_split: Regex,
    choice_marker: Regex,
    id_line: Regex,
    correct_answer: Regex,
    rationale: Regex,
}

impl DumpPatterns {
    fn new() -> Result<Self> {
        Ok(Self {
            block_split: Regex::new(r"Question ID [a-f0-9]+")?,
            choice_marker: Regex::new(r"\n([A-D])[.)]")?,
            id_line: Regex::new(r"(?m)^ID:\s*[a-f0-9]+\s*\n")?,
            correct_answer: Regex::new(r"Correct Answer:\s*([A-D])")?,
            rationale: Regex::new(r"(?s)Rationale\s+(.+)")?,
        })
    }
}

/// Parse a question dump into a bank named `set_name`.
///
/// Blocks without a question text, choices, or a correct answer are
/// skipped with a warning.
pub fn parse_question_dump(text: &str, set_name: &str) -> Result<QuestionSet> {
    let patterns = DumpPatterns::new()?;
    let text = text.replace("\r\n", "\n");

    let mut questions = Vec::new();
    for (block_number, block) in patterns.block_split.split(&text).skip(1).enumerate() {
        let next_id = questions.len() as u64 + 1;
        match parse_block(&patterns, block, next_id) {
            Some(question) => questions.push(question),
            None => tracing::warn!(
                "skipping question block {}: missing text, choices, or answer",
                block_number + 1
            ),
        }
    }

    tracing::info!("imported {} question(s) into '{set_name}'", questions.len());

    Ok(QuestionSet {
        name: set_name.to_string(),
        questions,
    })
}

fn parse_block(patterns: &DumpPatterns, block: &str, id: u64) -> Option<Question> {
    let first_choice = patterns.choice_marker.find(block)?;

    let prompt = patterns
        .id_line
        .replace_all(block[..first_choice.start()].trim(), "");
    let prompt = collapse_whitespace(&prompt);

    // Choices run from the first marker up to the answer section.
    let region_start = first_choice.start();
    let region_end = ANSWER_SECTION_MARKERS
        .iter()
        .filter_map(|m| block[region_start + 1..].find(m))
        .min()
        .map_or(block.len(), |offset| region_start + 1 + offset);
    let region = &block[region_start..region_end];

    let markers: Vec<_> = patterns.choice_marker.captures_iter(region).collect();
    let mut choices = Choices::new();
    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(letter)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(region.len(), |m| m.start());
        let choice_text = collapse_whitespace(&region[whole.end()..end]);
        if !choice_text.is_empty() {
            choices.insert(letter.as_str().to_string(), choice_text);
        }
    }

    let correct_answer = patterns
        .correct_answer
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())?;

    let explanation = patterns
        .rationale
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| {
            let body = m.as_str();
            let end = RATIONALE_END_MARKERS
                .iter()
                .filter_map(|marker| body.find(marker))
                .min()
                .unwrap_or(body.len());
            collapse_whitespace(&body[..end])
        })
        .filter(|e| !e.is_empty());

    if prompt.is_empty() || choices.is_empty() {
        return None;
    }

    Some(Question {
        id: QuestionId::from(id),
        prompt,
        choices,
        correct_answer,
        explanation,
    })
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
