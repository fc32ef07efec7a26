//! User-contributed character drafts.
//!
//! A draft is validated and turned into the `Character` it would become.
//! Submission never reaches the live knowledge base: the built-in catalog
//! is read-only for the lifetime of the process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::attributes::{AttributeKey, Attributes};
use super::character::{Character, CharacterId, PLACEHOLDER_IMAGE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContributionError {
    #[error("Please fill in the name.")]
    MissingName,

    #[error("Please fill in the description.")]
    MissingDescription,
}

/// A character proposed through the contribution form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContributionDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Attributes,
    /// Free-form contributor name; may be empty.
    pub contributed_by: String,
}

impl Default for ContributionDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            attributes: Attributes::default(),
            contributed_by: String::new(),
        }
    }
}

impl ContributionDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Toggle an attribute checkbox.
    pub fn set_attribute(&mut self, key: impl Into<AttributeKey>, checked: bool) {
        self.attributes.insert(key.into(), checked);
    }

    /// Check the required fields.
    pub fn validate(&self) -> Result<(), ContributionError> {
        if self.name.trim().is_empty() {
            return Err(ContributionError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ContributionError::MissingDescription);
        }
        Ok(())
    }

    /// Validate and build the character this draft describes.
    pub fn into_character(self, id: CharacterId) -> Result<Character, ContributionError> {
        self.validate()?;
        let image = if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            self.image
        };
        Ok(Character {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image,
            attributes: self.attributes,
        })
    }
}
