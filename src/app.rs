//! Todo Frontend App
//!
//! Renders one independent todo list per configured backend.

use leptos::prelude::*;

use crate::components::TodoInterface;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!(
        "[APP] API {:?}, backends {:?}",
        config.api_url.as_deref().unwrap_or(todo_core::DEFAULT_BASE_URL),
        config.backends
    );

    let ctx = AppContext::new(config);
    provide_context(ctx);

    view! {
        <main class="todo-app">
            {ctx
                .backends()
                .into_iter()
                .map(|backend| view! { <TodoInterface backend=backend /> })
                .collect_view()}
        </main>
    }
}
