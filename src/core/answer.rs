//! Answers and the ask history.
//!
//! The player answers each question with yes, no, or "I don't know".
//! Every answered question is appended to the game's history as an
//! `AnswerRecord`, in ask order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::knowledge::Question;

/// A player's reply to a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    /// Abstain. Leaves the candidate set unchanged.
    Unknown,
}

impl Answer {
    /// The attribute value this answer requires, or `None` for `Unknown`.
    #[must_use]
    pub const fn expected_value(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Unknown => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Unknown => "unknown",
        })
    }
}

impl FromStr for Answer {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(Answer::Yes),
            "n" | "no" => Ok(Answer::No),
            "?" | "u" | "unknown" | "idk" => Ok(Answer::Unknown),
            _ => Err(EngineError::UnknownAnswer(s.to_string())),
        }
    }
}

/// A question together with the answer it received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: Question,
    pub answer: Answer,
}

impl AnswerRecord {
    /// Create a new answer record.
    #[must_use]
    pub fn new(question: Question, answer: Answer) -> Self {
        Self { question, answer }
    }
}
