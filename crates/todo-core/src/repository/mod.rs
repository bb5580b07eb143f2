//! Repository Layer
//!
//! Data access for the remote todo collection.

mod http;
mod traits;

pub use http::HttpTodoRepository;
pub use traits::TodoRepository;
