//! New Todo Form Component
//!
//! Form for creating a todo in one list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::ListStateStoreFields;

use crate::store::{ControllerHandle, TodoStore};

#[component]
pub fn NewTodoForm(state: TodoStore, controller: ControllerHandle) -> impl IntoView {
    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = state.new_text().get_untracked();
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.create(&text).await;
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add a new todo"
                prop:value=move || state.new_text().get()
                on:input=move |ev| state.new_text().set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
