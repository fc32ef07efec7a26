//! Game sessions for front-ends.
//!
//! A `GameSession` bundles what a front-end needs to run games back to
//! back: the catalog, the engine configuration, an RNG, and the current
//! state. It holds one state value at a time and swaps it on every answer.
//!
//! ## Snapshots
//!
//! `snapshot` captures the state together with the RNG position, so a
//! restored session asks exactly the questions the original would have.
//! Snapshots encode to bytes with `bincode`; where the bytes go is the
//! caller's business.

use serde::{Deserialize, Serialize};

use super::machine::{apply_answer, start_new_game};
use crate::core::{Answer, Difficulty, EngineConfig, GameRng, GameRngState, GameState};
use crate::error::Result;
use crate::knowledge::{Category, Character, KnowledgeBase};

/// A running sequence of games over one knowledge base.
#[derive(Clone, Debug)]
pub struct GameSession<'kb> {
    kb: &'kb KnowledgeBase,
    config: EngineConfig,
    rng: GameRng,
    state: GameState,
}

impl<'kb> GameSession<'kb> {
    /// Start a session and its first game.
    pub fn new(
        kb: &'kb KnowledgeBase,
        config: EngineConfig,
        difficulty: Difficulty,
        category: Option<Category>,
        mut rng: GameRng,
    ) -> Self {
        let state = start_new_game(kb, &config, difficulty, category, &mut rng);
        Self { kb, config, rng, state }
    }

    /// The multiplayer preset: medium difficulty over game characters.
    pub fn multiplayer(kb: &'kb KnowledgeBase, rng: GameRng) -> Self {
        Self::new(kb, EngineConfig::default(), Difficulty::Medium, Some(Category::Games), rng)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Answer the current question and return the new state.
    pub fn answer(&mut self, answer: Answer) -> &GameState {
        self.state = apply_answer(&self.state, answer, &mut self.rng);
        &self.state
    }

    /// Start a fresh game with the same difficulty and category.
    pub fn restart(&mut self) -> &GameState {
        self.state = start_new_game(
            self.kb,
            &self.config,
            self.state.difficulty(),
            self.state.category(),
            &mut self.rng,
        );
        &self.state
    }

    /// Other possibilities to show beside the guess.
    #[must_use]
    pub fn runner_ups(&self) -> Vec<&Character> {
        self.state.runner_ups(self.config.runner_up_limit).collect()
    }

    /// Capture the state and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume from a snapshot taken against the same knowledge base.
    pub fn restore(
        kb: &'kb KnowledgeBase,
        config: EngineConfig,
        snapshot: SessionSnapshot,
    ) -> Self {
        Self {
            kb,
            config,
            rng: GameRng::from_state(&snapshot.rng),
            state: snapshot.state,
        }
    }
}

/// Serializable session checkpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
