//! Item Entity
//!
//! A single todo as the remote collection returns it.

use serde::{Deserialize, Serialize};

use super::error::{TodoError, TodoResult};

/// Server-assigned identifier. Never generated on the client.
pub type ItemId = u32;

/// A todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, immutable for the item's lifetime
    pub id: ItemId,
    /// Display text; the Go backend names this field `todo`
    #[serde(alias = "todo")]
    pub text: String,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}

/// Request body for create and update.
///
/// The text goes out under both `text` and `todo`; the Go backend only reads `todo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoText<'a> {
    pub text: &'a str,
    pub todo: &'a str,
}

impl<'a> TodoText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, todo: text }
    }
}

/// Validate user-entered todo text, returning it trimmed.
pub fn validated_text(raw: &str) -> TodoResult<&str> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(text)
}

/// Parse the id typed into the update form.
pub fn parse_item_id(raw: &str) -> TodoResult<ItemId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TodoError::MissingId);
    }
    raw.parse::<ItemId>()
        .map_err(|_| TodoError::InvalidId(raw.to_string()))
}
