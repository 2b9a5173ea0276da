//! Item domain model.
//!
//! # Responsibility
//! - Define the persisted `Item` record and its wire shape.
//! - Define `NewItem` (create) and `ItemPatch` (update) payloads.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes afterwards.
//! - `name` is always present and at most `NAME_MAX_CHARS` characters.
//! - `description` is optional and serialized as `null` when absent.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned item identifier.
pub type ItemId = i64;

/// Upper bound for `name`, counted in characters.
pub const NAME_MAX_CHARS: usize = 256;

/// Validation failures for item payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// `name` exceeds `NAME_MAX_CHARS` characters.
    NameTooLong { max: usize, actual: usize },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooLong { max, actual } => {
                write!(f, "name must be at most {max} characters, got {actual}")
            }
        }
    }
}

impl Error for ItemValidationError {}

/// Persisted item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    /// Checks field bounds before persistence.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        validate_name(&self.name)
    }

    /// Merges provided patch fields into this record.
    ///
    /// Fields absent from the patch keep their current value. A present
    /// `description: None` clears the description.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }
}

/// Creation payload: `{"name": ..., "description": ...?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    /// Checks field bounds before persistence.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        validate_name(&self.name)
    }
}

/// Update payload: `{"name": ...?, "description": ...?}`.
///
/// `description` distinguishes "omitted" (`None`) from "explicitly null"
/// (`Some(None)`). A null `name` is treated the same as an omitted one
/// because stored items always carry a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
}

// Only runs when the key is present, so `null` becomes `Some(None)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn validate_name(name: &str) -> Result<(), ItemValidationError> {
    let actual = name.chars().count();
    if actual > NAME_MAX_CHARS {
        return Err(ItemValidationError::NameTooLong {
            max: NAME_MAX_CHARS,
            actual,
        });
    }
    Ok(())
}
