//! Boolean attribute vocabulary for characters.
//!
//! Every character is described by a set of named yes/no traits such as
//! `isMale` or `canFly`. Questions probe exactly one of these traits.
//!
//! A character does not have to define every key. Looking up a key that
//! is absent yields `false`, so seed data only needs to list the traits
//! that hold.

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing a character attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collection of boolean attributes.
pub type Attributes = FxHashMap<AttributeKey, bool>;

/// Read an attribute, treating an undefined key as `false`.
#[must_use]
pub fn attribute_value(attributes: &Attributes, key: &str) -> bool {
    attributes.get(key).copied().unwrap_or(false)
}

/// Attribute names used by the built-in catalog and the contribution form.
pub mod keys {
    pub const IS_MALE: &str = "isMale";
    pub const IS_FICTIONAL: &str = "isFictional";
    pub const IS_FROM_MOVIE: &str = "isFromMovie";
    pub const IS_SUPERHERO: &str = "isSuperhero";
    pub const HAS_SUPERPOWERS: &str = "hasSuperpowers";
    pub const IS_VILLAIN: &str = "isVillain";
    pub const IS_DISNEY: &str = "isDisney";
    pub const IS_HUMAN: &str = "isHuman";
    pub const IS_FROM_BOOK: &str = "isFromBook";
    pub const HAS_SIDEKICK: &str = "hasSidekick";
    pub const IS_FROM_TV_SHOW: &str = "isFromTVShow";
    pub const IS_ANIMATED: &str = "isAnimated";
    pub const CAN_FLY: &str = "canFly";
    pub const IS_FUNNY: &str = "isFunny";
    pub const HAS_MAGIC: &str = "hasMagic";
    pub const IS_HISTORICAL: &str = "isHistorical";
    pub const IS_ALIVE: &str = "isAlive";
    pub const IS_AMERICAN: &str = "isAmerican";
    pub const IS_OLDER_THAN_50: &str = "isOlderThan50";
    pub const WEARS_DISTINCTIVE_COSTUME: &str = "wearsDistinctiveCostume";
    pub const IS_FROM_GAME: &str = "isFromGame";
    pub const IS_FROM_VIDEO_GAME: &str = "isFromVideoGame";
    pub const IS_SPORTS_RELATED: &str = "isSportsRelated";
    pub const IS_MUSICIAN: &str = "isMusician";
    pub const IS_POLITICIAN: &str = "isPolitician";
    pub const IS_SCIENTIST: &str = "isScientist";
    pub const IS_FROM_ANIME: &str = "isFromAnime";

    /// Every known key, in contribution-form order.
    pub const ALL: [&str; 27] = [
        IS_MALE,
        IS_FICTIONAL,
        IS_FROM_MOVIE,
        IS_SUPERHERO,
        HAS_SUPERPOWERS,
        IS_VILLAIN,
        IS_DISNEY,
        IS_HUMAN,
        IS_FROM_BOOK,
        HAS_SIDEKICK,
        IS_FROM_TV_SHOW,
        IS_ANIMATED,
        CAN_FLY,
        IS_FUNNY,
        HAS_MAGIC,
        IS_HISTORICAL,
        IS_ALIVE,
        IS_AMERICAN,
        IS_OLDER_THAN_50,
        WEARS_DISTINCTIVE_COSTUME,
        IS_FROM_GAME,
        IS_FROM_VIDEO_GAME,
        IS_SPORTS_RELATED,
        IS_MUSICIAN,
        IS_POLITICIAN,
        IS_SCIENTIST,
        IS_FROM_ANIME,
    ];
}
