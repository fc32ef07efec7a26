//! Core engine types: answers, difficulty, configuration, RNG, state.
//!
//! These are the values exchanged between the engine and a front-end.
//! The knowledge catalog lives in `knowledge`; the algorithms in `engine`.

pub mod answer;
pub mod config;
pub mod rng;
pub mod state;

pub use answer::{Answer, AnswerRecord};
pub use config::{CandidatePool, Difficulty, DifficultyPolicy, EngineConfig};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::GameState;
