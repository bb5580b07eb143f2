//! Update Todo Form Component
//!
//! Replaces the text of the todo whose id is typed in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::ListStateStoreFields;

use crate::store::{ControllerHandle, TodoStore};

#[component]
pub fn UpdateTodoForm(state: TodoStore, controller: ControllerHandle) -> impl IntoView {
    let update_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = state.update_id().get_untracked();
        let text = state.update_text().get_untracked();
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.update(&id, &text).await;
        });
    };

    view! {
        <form class="update-todo-form" on:submit=update_todo>
            <input
                type="text"
                inputmode="numeric"
                placeholder="Todo Id"
                prop:value=move || state.update_id().get()
                on:input=move |ev| state.update_id().set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="New Todo"
                prop:value=move || state.update_text().get()
                on:input=move |ev| state.update_text().set(event_target_value(&ev))
            />
            <button type="submit">"Update Todo"</button>
        </form>
    }
}
