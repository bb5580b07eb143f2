//! UI Components
//!
//! Leptos components for the todo lists.

mod new_todo_form;
mod status_banner;
mod todo_card;
mod todo_interface;
mod update_todo_form;

pub use new_todo_form::NewTodoForm;
pub use status_banner::StatusBanner;
pub use todo_card::ItemCard;
pub use todo_interface::TodoInterface;
pub use update_todo_form::UpdateTodoForm;
