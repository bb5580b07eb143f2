//! List State Store
//!
//! Uses Leptos reactive_stores so inputs, banner and list re-render per field.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ApiConfig, HttpTodoRepository, ListController, ListState};

/// Reactive state of one list
pub type TodoStore = Store<ListState>;

pub type TodoController = ListController<HttpTodoRepository, TodoStore>;

/// The controller holds an `Rc`, so it lives in thread-local arena storage
pub type ControllerHandle = StoredValue<TodoController, LocalStorage>;

/// Fresh state and controller for one backend's list.
///
/// Starts out loading: the caller issues the first load on mount.
pub fn new_list(config: ApiConfig) -> (TodoStore, ControllerHandle) {
    let state = Store::new(ListState::pending_load());
    let repository = Rc::new(HttpTodoRepository::new(config));
    let controller = StoredValue::new_local(ListController::new(repository, state));
    (state, controller)
}
