//! # character-guess
//!
//! A "guess the character" engine: ask yes/no questions, prune the
//! candidate set with each answer, and stop with a guess and a confidence.
//!
//! ## Design Principles
//!
//! 1. **Replace, Don't Mutate**: Every answer produces a new `GameState`.
//!    Terminal states are fixed points of the transition.
//!
//! 2. **Total Functions**: Empty candidate sets, exhausted question pools,
//!    and tiny categories all degrade to well-defined defaults.
//!
//! 3. **Isolated Randomness**: Only the selector draws random numbers, and
//!    only through `RandomSource`. Hard mode draws none.
//!
//! ## Architecture
//!
//! - **Information Gain**: Candidates are equally likely; a question's
//!   value is the expected drop in `log2(candidates)` after its answer.
//!
//! - **Persistent Data Structures**: States share structure via `im-rs`,
//!   so each transition is cheap.
//!
//! ## Modules
//!
//! - `core`: Answers, difficulty, configuration, RNG, game state
//! - `knowledge`: Characters, questions, categories, the built-in catalog
//! - `engine`: Entropy, question selection, the state machine, sessions
//! - `error`: Parse and snapshot errors

pub mod core;
pub mod engine;
pub mod error;
pub mod knowledge;

// Re-export commonly used types
pub use crate::core::{
    Answer, AnswerRecord,
    CandidatePool, Difficulty, DifficultyPolicy, EngineConfig,
    GameRng, GameRngState, RandomSource,
    GameState,
};

pub use crate::knowledge::{
    AttributeKey, Attributes,
    Category, Character, CharacterId, Question, QuestionId,
    ContributionDraft, ContributionError,
    KnowledgeBase,
};

pub use crate::engine::{
    apply_answer, start_new_game, select_next,
    information_gain, set_uncertainty, attribute_entropy,
    GameSession, SessionSnapshot,
};

pub use crate::error::{EngineError, Result};
