//! Repository Layer - Core Trait
//!
//! Abstract interface over the remote todo collection.
//! The HTTP implementation talks to the real API; tests substitute their own.

use async_trait::async_trait;

use crate::domain::{Item, ItemId, TodoResult};

/// CRUD operations over the remote collection
///
/// Futures are not `Send`: every call runs on the single UI thread.
#[async_trait(?Send)]
pub trait TodoRepository {
    /// Fetch the full collection in server order
    async fn list(&self) -> TodoResult<Vec<Item>>;

    /// Create an item; the server assigns its id
    async fn create(&self, text: &str) -> TodoResult<Item>;

    /// Replace the text of an item. `None` when the server answers with an empty body.
    async fn update(&self, id: ItemId, text: &str) -> TodoResult<Option<Item>>;

    /// Delete an item by id
    async fn delete(&self, id: ItemId) -> TodoResult<()>;
}
