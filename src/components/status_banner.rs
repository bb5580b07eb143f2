use leptos::prelude::*;
use todo_core::ListStateStoreFields;

use crate::store::TodoStore;

/// Error banner for the last failed operation; renders nothing when clear
#[component]
pub fn StatusBanner(state: TodoStore) -> impl IntoView {
    move || {
        state.error().get().map(|message| {
            view! { <div class="error-banner" role="alert">{message}</div> }
        })
    }
}
