//! The 20-questions engine.
//!
//! - `entropy`: Uncertainty and information gain of candidate sets
//! - `selector`: Picks the next question for a difficulty level
//! - `machine`: Starts games and applies answers (the only transition)
//! - `session`: Convenience owner for front-ends, with snapshots
//!
//! ## Example
//!
//! ```
//! use character_guess::core::{Answer, Difficulty, EngineConfig, GameRng};
//! use character_guess::engine::{apply_answer, start_new_game};
//! use character_guess::knowledge::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin();
//! let mut rng = GameRng::new(42);
//!
//! let mut state = start_new_game(kb, &EngineConfig::default(), Difficulty::Hard, None, &mut rng);
//! while !state.is_over() {
//!     println!("{}", state.current_question_text().unwrap());
//!     state = apply_answer(&state, Answer::No, &mut rng);
//! }
//! println!("{:?} ({:.0}%)", state.guessed().map(|c| &c.name), state.confidence());
//! ```

pub mod entropy;
pub mod machine;
pub mod selector;
pub mod session;

pub use entropy::{attribute_entropy, information_gain, set_uncertainty};
pub use machine::{apply_answer, start_new_game, termination_reached};
pub use selector::{rank_questions, select_next, ScoredQuestion};
pub use session::{GameSession, SessionSnapshot};
