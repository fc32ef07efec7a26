//! Error types.
//!
//! The engine itself is total: empty pools, empty candidate sets, and
//! terminal states all degrade to well-defined defaults. Errors only come
//! from the edges - parsing user-facing names and encoding snapshots.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown answer: {0:?} (expected yes, no or unknown)")]
    UnknownAnswer(String),

    #[error("unknown difficulty: {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
