//! Yes/no questions, each bound to one attribute.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeKey;

/// Unique identifier for a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// A question probing a single boolean attribute.
///
/// Several questions may share an attribute; each question maps to exactly one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub attribute: AttributeKey,
}

impl Question {
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        attribute: impl Into<AttributeKey>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            attribute: attribute.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_new() {
        let q = Question::new(QuestionId::new(4), "Can your character fly?", "canFly");

        assert_eq!(q.id, QuestionId::new(4));
        assert_eq!(q.attribute.as_str(), "canFly");
        assert_eq!(format!("{}", q.id), "Question(4)");
    }
}
