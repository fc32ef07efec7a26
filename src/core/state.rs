//! Game state: the value threaded through a game.
//!
//! ## Lifecycle
//!
//! - Created by `engine::start_new_game`
//! - Replaced (never mutated in place) by `engine::apply_answer`
//! - Dropped when the front-end resets
//!
//! ## Invariants
//!
//! - `remaining_questions` never holds a question already in `asked_history`
//! - `possible_candidates` only shrinks, and keeps catalog order
//! - Once `game_over` is set, no transition changes the state
//!
//! Sequences use `im` persistent vectors, so producing the next state
//! shares structure with the previous one instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::answer::AnswerRecord;
use super::config::Difficulty;
use crate::knowledge::{Category, Character, Question};

/// Authoritative state of a single game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Characters still consistent with every answer, in catalog order.
    pub(crate) possible_candidates: Vector<Character>,

    /// Questions not yet asked.
    pub(crate) remaining_questions: Vector<Question>,

    /// Asked questions with their answers, in ask order.
    pub(crate) asked_history: Vector<AnswerRecord>,

    /// The question being presented, if any.
    pub(crate) current_question: Option<Question>,

    pub(crate) game_over: bool,

    /// Final guess; only set once the game is over.
    pub(crate) guessed_entity: Option<Character>,

    /// Guess confidence in [0, 100].
    pub(crate) confidence: f64,

    pub(crate) difficulty: Difficulty,

    /// Category requested at start. `None` means no filter was asked for.
    pub(crate) category: Option<Category>,
}

impl GameState {
    /// Create an active state with an empty history and no current question.
    #[must_use]
    pub(crate) fn new(
        candidates: Vector<Character>,
        questions: Vector<Question>,
        difficulty: Difficulty,
        category: Option<Category>,
    ) -> Self {
        Self {
            possible_candidates: candidates,
            remaining_questions: questions,
            asked_history: Vector::new(),
            current_question: None,
            game_over: false,
            guessed_entity: None,
            confidence: 0.0,
            difficulty,
            category,
        }
    }

    // === Raw State ===

    /// Surviving candidates, in catalog order.
    #[must_use]
    pub fn candidates(&self) -> &Vector<Character> {
        &self.possible_candidates
    }

    /// Questions not yet asked.
    #[must_use]
    pub fn remaining_questions(&self) -> &Vector<Question> {
        &self.remaining_questions
    }

    /// Ask history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<AnswerRecord> {
        &self.asked_history
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    // === Rendering Projections ===

    /// Text of the question to display.
    #[must_use]
    pub fn current_question_text(&self) -> Option<&str> {
        self.current_question.as_ref().map(|q| q.text.as_str())
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn questions_asked(&self) -> usize {
        self.asked_history.len()
    }

    /// Share of the question catalog already asked, as a percentage.
    ///
    /// Returns 0 when the catalog was empty to begin with.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let asked = self.asked_history.len();
        let total = asked + self.remaining_questions.len();
        if total == 0 {
            return 0.0;
        }
        asked as f64 / total as f64 * 100.0
    }

    /// The guessed character, once the game is over.
    #[must_use]
    pub fn guessed(&self) -> Option<&Character> {
        self.guessed_entity.as_ref()
    }

    /// Guess confidence in [0, 100]; 0 until the game ends with a guess.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Other possibilities after the guess, at most `limit` of them.
    pub fn runner_ups(&self, limit: usize) -> impl Iterator<Item = &Character> {
        let skip = usize::from(self.guessed_entity.is_some());
        let take = if self.guessed_entity.is_some() { limit } else { 0 };
        self.possible_candidates.iter().skip(skip).take(take)
    }
}
