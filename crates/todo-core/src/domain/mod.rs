//! Domain Layer
//!
//! Todo entity and the error taxonomy shared by the repository and the
//! list controller. No network or UI dependencies here.

mod error;
mod item;

pub use error::{Operation, TodoError, TodoResult};
pub use item::{parse_item_id, validated_text, Item, ItemId, TodoText};
