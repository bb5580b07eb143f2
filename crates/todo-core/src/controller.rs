//! List Controller
//!
//! Client-side todo list state and the request → await → patch cycle for
//! each list operation. Every operation clears the previous error, makes at
//! most one repository call and applies its outcome to the state.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::domain::{parse_item_id, validated_text, Item, ItemId, Operation, TodoError, TodoResult};
use crate::repository::TodoRepository;

/// State owned by one list instance
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "stores", derive(reactive_stores::Store))]
pub struct ListState {
    /// Items, most recent first. At most one entry per id.
    pub items: Vec<Item>,
    /// Banner text of the last failed operation
    pub error: Option<String>,
    /// True while a load request is outstanding
    pub loading: bool,
    /// Create form input
    pub new_text: String,
    /// Update form id input, as typed
    pub update_id: String,
    /// Update form text input
    pub update_text: String,
}

impl ListState {
    /// State for a list whose first load is about to be issued
    pub fn pending_load() -> Self {
        let mut state = Self::default();
        state.begin_load();
        state
    }

    /// Nothing to show and nothing on the way
    pub fn shows_empty_indicator(&self) -> bool {
        !self.loading && self.items.is_empty()
    }

    pub fn begin_load(&mut self) {
        self.error = None;
        self.loading = true;
    }

    /// Store the server's sequence reversed. A failure keeps the current list.
    pub fn finish_load(&mut self, result: TodoResult<Vec<Item>>) -> TodoResult<()> {
        self.loading = false;
        let mut items = result.map_err(|e| self.fail(Operation::Load, e))?;
        items.reverse();
        let mut seen = HashSet::with_capacity(items.len());
        items.retain(|item| seen.insert(item.id));
        log::debug!("[LIST] Loaded {} items", items.len());
        self.items = items;
        Ok(())
    }

    /// Returns the trimmed text to send
    pub fn begin_create(&mut self, text: &str) -> TodoResult<String> {
        self.error = None;
        validated_text(text)
            .map(str::to_owned)
            .map_err(|e| self.fail(Operation::Create, e))
    }

    pub fn finish_create(&mut self, result: TodoResult<Item>) -> TodoResult<()> {
        let item = result.map_err(|e| self.fail(Operation::Create, e))?;
        self.items.retain(|existing| existing.id != item.id);
        self.items.insert(0, item);
        self.new_text.clear();
        Ok(())
    }

    /// Returns the parsed id and trimmed text to send
    pub fn begin_update(&mut self, id: &str, text: &str) -> TodoResult<(ItemId, String)> {
        self.error = None;
        let checked = parse_item_id(id)
            .and_then(|id| validated_text(text).map(|text| (id, text.to_owned())));
        checked.map_err(|e| self.fail(Operation::Update, e))
    }

    pub fn finish_update(&mut self, id: ItemId, result: TodoResult<Option<Item>>) -> TodoResult<()> {
        let updated = result.map_err(|e| self.fail(Operation::Update, e))?;
        let Some(updated) = updated else {
            log::debug!("[LIST] Update of {} returned no body", id);
            return Ok(());
        };
        if let Some(entry) = self.items.iter_mut().find(|item| item.id == id) {
            entry.text = updated.text;
        }
        self.update_id.clear();
        self.update_text.clear();
        Ok(())
    }

    pub fn begin_delete(&mut self) {
        self.error = None;
    }

    pub fn finish_delete(&mut self, id: ItemId, result: TodoResult<()>) -> TodoResult<()> {
        result.map_err(|e| self.fail(Operation::Delete, e))?;
        self.items.retain(|item| item.id != id);
        Ok(())
    }

    fn fail(&mut self, op: Operation, err: TodoError) -> TodoError {
        if err.is_validation() {
            log::debug!("[LIST] {:?} rejected: {}", op, err);
        } else {
            log::error!("[LIST] {:?} failed: {}", op, err);
        }
        self.error = Some(err.user_message(op));
        err
    }
}

/// Mutable access to a `ListState` that may have gone away.
///
/// `None` means the owner was torn down; completion handlers then do nothing.
pub trait StateHandle {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> Option<R>;
}

impl StateHandle for Rc<RefCell<ListState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(feature = "stores")]
impl StateHandle for reactive_stores::Store<ListState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> Option<R> {
        use reactive_graph::traits::Update;
        self.try_update(f)
    }
}

/// Drives list operations against a repository
pub struct ListController<R, S> {
    repository: Rc<R>,
    state: S,
}

impl<R, S: Clone> Clone for ListController<R, S> {
    fn clone(&self) -> Self {
        Self {
            repository: Rc::clone(&self.repository),
            state: self.state.clone(),
        }
    }
}

impl<R: TodoRepository, S: StateHandle> ListController<R, S> {
    pub fn new(repository: Rc<R>, state: S) -> Self {
        Self { repository, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the whole collection
    pub async fn load(&self) -> TodoResult<()> {
        if self.state.with_state(ListState::begin_load).is_none() {
            return Ok(());
        }
        let result = self.repository.list().await;
        self.apply(|state| state.finish_load(result))
    }

    pub async fn create(&self, text: &str) -> TodoResult<()> {
        let Some(begun) = self.state.with_state(|state| state.begin_create(text)) else {
            return Ok(());
        };
        let text = begun?;
        let result = self.repository.create(&text).await;
        self.apply(|state| state.finish_create(result))
    }

    /// `id` is the raw form input; it is parsed before any request is made
    pub async fn update(&self, id: &str, text: &str) -> TodoResult<()> {
        let Some(begun) = self.state.with_state(|state| state.begin_update(id, text)) else {
            return Ok(());
        };
        let (id, text) = begun?;
        let result = self.repository.update(id, &text).await;
        self.apply(|state| state.finish_update(id, result))
    }

    /// Delete after `confirm` agrees. Declining leaves everything untouched.
    pub async fn delete(&self, id: ItemId, confirm: impl FnOnce(ItemId) -> bool) -> TodoResult<()> {
        if !confirm(id) {
            log::debug!("[LIST] Delete of {} declined", id);
            return Ok(());
        }
        if self.state.with_state(ListState::begin_delete).is_none() {
            return Ok(());
        }
        let result = self.repository.delete(id).await;
        self.apply(|state| state.finish_delete(id, result))
    }

    fn apply(&self, patch: impl FnOnce(&mut ListState) -> TodoResult<()>) -> TodoResult<()> {
        self.state.with_state(patch).unwrap_or_else(|| {
            log::debug!("[LIST] State disposed, response ignored");
            Ok(())
        })
    }
}
