//! Todo Client Core
//!
//! Layered the same way as the app:
//! - domain: the todo entity and error taxonomy
//! - repository: access to the remote collection (HTTP)
//! - controller: per-list state and the operations that patch it

mod config;
mod controller;
mod domain;
mod repository;

pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use controller::{ListController, ListState, StateHandle};
pub use domain::{parse_item_id, validated_text, Item, ItemId, Operation, TodoError, TodoResult, TodoText};
pub use repository::{HttpTodoRepository, TodoRepository};

#[cfg(feature = "stores")]
pub use controller::ListStateStoreFields;
