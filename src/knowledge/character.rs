//! Characters - the guessable entities.
//!
//! A `Character` is static seed data: identity, display fields, and a
//! boolean attribute map. Nothing mutates a character once the knowledge
//! base has been built.

use serde::{Deserialize, Serialize};

use super::attributes::{attribute_value, AttributeKey, Attributes};

/// Image shown when a character has no picture of its own.
pub const PLACEHOLDER_IMAGE: &str = "/characters/placeholder.jpg";

/// Unique identifier for a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// A guessable character.
///
/// ## Example
///
/// ```
/// use character_guess::knowledge::{Character, CharacterId};
///
/// let hero = Character::new(CharacterId::new(1), "Superman")
///     .with_description("The Man of Steel")
///     .with_traits(&["isMale", "canFly"]);
///
/// assert!(hero.has("canFly"));
/// assert!(!hero.has("isVillain")); // undefined keys read as false
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,

    /// Display name.
    pub name: String,

    /// Short description shown with a guess.
    pub description: String,

    /// Image reference (path or URL).
    pub image: String,

    /// Boolean traits. Keys may be missing.
    pub attributes: Attributes,
}

impl Character {
    /// Create a character with no description and no attributes.
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            attributes: Attributes::default(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set a single attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<AttributeKey>, value: bool) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Mark every listed attribute as `true`.
    #[must_use]
    pub fn with_traits(mut self, traits: &[&str]) -> Self {
        for &key in traits {
            self.attributes.insert(AttributeKey::from(key), true);
        }
        self
    }

    /// Query an attribute. Undefined keys are `false`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        attribute_value(&self.attributes, key)
    }
}
