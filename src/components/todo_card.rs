//! Todo Card Component
//!
//! Read-only view of one todo.

use leptos::prelude::*;
use todo_core::Item;

/// Shows an item's id and text. No state, no side effects.
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    view! {
        <div class="todo-card">
            <div class="todo-card-id">"Id: " {item.id}</div>
            <div class="todo-card-text">{item.text}</div>
        </div>
    }
}
