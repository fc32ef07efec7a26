//! Knowledge base: characters, questions, categories.
//!
//! - `attributes`: Boolean attribute keys and lookup (missing = false)
//! - `character`: Guessable characters
//! - `question`: Yes/no questions bound to one attribute
//! - `category`: Start-of-game filters
//! - `base`: The ordered catalog and the process-wide built-in instance
//! - `contribution`: Validated drafts of user-proposed characters

pub mod attributes;
pub mod base;
pub mod category;
pub mod character;
pub mod contribution;
pub mod question;
mod seed;

pub use attributes::{attribute_value, keys, AttributeKey, Attributes};
pub use base::KnowledgeBase;
pub use category::Category;
pub use character::{Character, CharacterId, PLACEHOLDER_IMAGE};
pub use contribution::{ContributionDraft, ContributionError};
pub use question::{Question, QuestionId};
