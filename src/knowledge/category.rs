//! Category filters applied when a game starts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attributes::keys;
use super::character::Character;
use crate::error::EngineError;

/// Optional theme restricting which characters take part in a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No restriction.
    #[default]
    All,
    Movies,
    Books,
    Games,
    History,
    Sports,
    Cartoons,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::Movies,
        Category::Books,
        Category::Games,
        Category::History,
        Category::Sports,
        Category::Cartoons,
    ];

    /// Does `character` belong to this category?
    #[must_use]
    pub fn matches(self, character: &Character) -> bool {
        match self {
            Category::All => true,
            Category::Movies => character.has(keys::IS_FROM_MOVIE),
            Category::Books => character.has(keys::IS_FROM_BOOK),
            Category::Games => {
                character.has(keys::IS_FROM_GAME) || character.has(keys::IS_FROM_VIDEO_GAME)
            }
            Category::History => character.has(keys::IS_HISTORICAL),
            Category::Sports => character.has(keys::IS_SPORTS_RELATED),
            Category::Cartoons => character.has(keys::IS_ANIMATED),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Movies => "movies",
            Category::Books => "books",
            Category::Games => "games",
            Category::History => "history",
            Category::Sports => "sports",
            Category::Cartoons => "cartoons",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or_else(|| EngineError::UnknownCategory(s.to_string()))
    }
}
