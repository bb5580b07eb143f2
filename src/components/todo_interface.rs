//! Todo Interface Component
//!
//! One backend's list: forms, status banner and the card collection.
//! Owns its own state; several instances never share anything.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{Item, ItemId, ListStateStoreFields};

use crate::components::{ItemCard, NewTodoForm, StatusBanner, UpdateTodoForm};
use crate::context::use_app_context;
use crate::store::new_list;

/// Blocking yes/no prompt before a delete is sent
fn confirm_delete(id: ItemId) -> bool {
    window()
        .confirm_with_message(&format!("Delete todo #{}?", id))
        .unwrap_or(false)
}

#[component]
pub fn TodoInterface(#[prop(into)] backend: String) -> impl IntoView {
    let ctx = use_app_context();
    let (state, controller) = new_list(ctx.api_config(&backend));

    // Load on mount
    Effect::new(move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.load().await;
        });
    });

    let refresh = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.load().await;
        });
    };

    let delete_todo = move |id: ItemId| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.delete(id, confirm_delete).await;
        });
    };

    view! {
        <div class=format!("todo-interface {}", backend)>
            <h2>"Todo app"</h2>

            <StatusBanner state=state />

            <Show
                when=move || !state.loading().get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <NewTodoForm state=state controller=controller />
                <UpdateTodoForm state=state controller=controller />
                <button class="refresh-btn" on:click=refresh>"Refresh"</button>

                <Show
                    when=move || !state.with(|list| list.shows_empty_indicator())
                    fallback=|| view! { <p class="empty">"No todos yet"</p> }
                >
                    <div class="todo-list">
                        // Keyed by text too, so an updated entry re-renders
                        <For
                            each=move || state.items().get()
                            key=|item| (item.id, item.text.clone())
                            children=move |item: Item| {
                                let id = item.id;
                                view! {
                                    <div class="todo-row">
                                        <ItemCard item=item />
                                        <button class="delete-btn" on:click=move |_| delete_todo(id)>
                                            "Delete Todo"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
