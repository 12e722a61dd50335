//! Core data model types for quizrun.
//!
//! Question sets are loaded once and never mutated afterwards, so the
//! session and scorer work on clones of these values.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered mapping from letter-label to choice text.
///
/// Insertion order is display order; the JSON object order of the source
/// file is preserved.
pub type Choices = IndexMap<String, String>;

/// Identifier of a question, unique across every loaded set.
///
/// Bank files carry either JSON strings or integers here; both are kept
/// in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for QuestionId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = QuestionId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer question id")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<QuestionId, E> {
                Ok(QuestionId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<QuestionId, E> {
                Ok(QuestionId(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<QuestionId, E> {
                Ok(QuestionId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<QuestionId, E> {
                Ok(QuestionId(v))
            }
        }

        d.deserialize_any(IdVisitor)
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: QuestionId,
    /// The question text shown to the user.
    #[serde(rename = "question")]
    pub prompt: String,
    /// Letter-label to choice text, in display order.
    #[serde(default)]
    pub choices: Choices,
    /// Letter-label of the correct choice.
    pub correct_answer: String,
    /// Rationale shown after a wrong answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Text of the choice with the given letter, if present.
    pub fn choice_text(&self, letter: &str) -> Option<&str> {
        self.choices.get(letter).map(String::as_str)
    }

    /// Whether the correct answer names one of the choices.
    pub fn has_valid_answer(&self) -> bool {
        self.choices.contains_key(&self.correct_answer)
    }
}

/// A named bank of questions, loaded as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Human-readable set name.
    #[serde(rename = "set_name")]
    pub name: String,
    /// Questions in bank order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
