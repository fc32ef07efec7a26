//! Difficulty levels and engine configuration.
//!
//! Difficulty is a policy knob with two effects:
//! - How greedily the next question is chosen (random, top-3, best)
//! - When the game stops and commits to a guess
//!
//! | difficulty | max questions | stop at <= candidates | selection pool |
//! |------------|---------------|-----------------------|----------------|
//! | easy       | 15            | 1                     | all (random)   |
//! | medium     | 12            | 2                     | top 3 by gain  |
//! | hard       | 8             | 3                     | best by gain   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the selector narrows its choice before picking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidatePool {
    /// Uniform pick among every remaining question, gains ignored.
    Any,
    /// Uniform pick among the `n` highest-gain questions.
    TopK(usize),
    /// Always the highest-gain question; no randomness.
    Best,
}

/// Thresholds and selection behaviour for one difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyPolicy {
    /// Stop once this many questions have been answered.
    pub max_questions: usize,

    /// Stop once at most this many candidates remain.
    pub min_candidates_to_stop: usize,

    /// Which questions the selector picks from.
    pub pool: CandidatePool,
}

/// Game difficulty, fixed for a game's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The termination thresholds and selection pool for this level.
    #[must_use]
    pub const fn policy(self) -> DifficultyPolicy {
        match self {
            Difficulty::Easy => DifficultyPolicy {
                max_questions: 15,
                min_candidates_to_stop: 1,
                pool: CandidatePool::Any,
            },
            Difficulty::Medium => DifficultyPolicy {
                max_questions: 12,
                min_candidates_to_stop: 2,
                pool: CandidatePool::TopK(3),
            },
            Difficulty::Hard => DifficultyPolicy {
                max_questions: 8,
                min_candidates_to_stop: 3,
                pool: CandidatePool::Best,
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == lowered)
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}

/// Engine configuration shared by every game a front-end starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Category filters yielding fewer characters than this fall back
    /// to the full catalog.
    pub min_category_size: usize,

    /// How many runner-up candidates a result screen shows.
    pub runner_up_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_category_size: 5,
            runner_up_limit: 3,
        }
    }
}

impl EngineConfig {
    /// Set the minimum playable category size.
    #[must_use]
    pub fn with_min_category_size(mut self, size: usize) -> Self {
        self.min_category_size = size;
        self
    }

    /// Set how many runner-ups to report.
    #[must_use]
    pub fn with_runner_up_limit(mut self, limit: usize) -> Self {
        self.runner_up_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        let easy = Difficulty::Easy.policy();
        assert_eq!((easy.max_questions, easy.min_candidates_to_stop), (15, 1));
        assert_eq!(easy.pool, CandidatePool::Any);

        let medium = Difficulty::Medium.policy();
        assert_eq!((medium.max_questions, medium.min_candidates_to_stop), (12, 2));
        assert_eq!(medium.pool, CandidatePool::TopK(3));

        let hard = Difficulty::Hard.policy();
        assert_eq!((hard.max_questions, hard.min_candidates_to_stop), (8, 3));
        assert_eq!(hard.pool, CandidatePool::Best);
    }

    #[test]
    fn test_default_difficulty() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "nightmare".parse::<Difficulty>(),
            Err(EngineError::UnknownDifficulty(_))
        ));
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::default();
        assert_eq!(config.min_category_size, 5);
        assert_eq!(config.runner_up_limit, 3);

        let config = config.with_min_category_size(2).with_runner_up_limit(5);
        assert_eq!(config.min_category_size, 2);
        assert_eq!(config.runner_up_limit, 5);
    }

    #[test]
    fn test_engine_config_serde() {
        let config = EngineConfig::default().with_runner_up_limit(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
