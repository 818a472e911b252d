//! Todo List Controller
//!
//! Mediates between UI events and the remote collection. Each operation works
//! on a caller-owned snapshot of the list; the caller publishes the result
//! back to the UI, so overlapping operations race last-writer-wins just like
//! the handlers that invoke them.

use futures::future::join_all;

use crate::api::TodoApi;
use crate::models::Todo;
use crate::state;

#[derive(Clone)]
pub struct TodoController<A: TodoApi> {
    api: A,
}

impl<A: TodoApi> TodoController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch the full collection. On failure the list stays empty; no retry.
    pub async fn load(&self) -> Vec<Todo> {
        match self.api.fetch_all().await {
            Ok(todos) => {
                log::debug!("loaded {} todos", todos.len());
                todos
            }
            Err(e) => {
                log::error!("failed to load todos: {e}");
                Vec::new()
            }
        }
    }

    /// Create an item from the input buffer.
    ///
    /// Blank input (after trimming) is a no-op. Returns true when the input
    /// was consumed and the field should be cleared. Nothing is applied
    /// locally before the remote call, so failure leaves the list alone.
    pub async fn add(&self, list: &mut Vec<Todo>, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }
        match self.api.create(text).await {
            Ok(created) => {
                state::push_todo(list, Todo { is_editing: false, ..created });
                true
            }
            Err(e) => {
                log::error!("failed to create todo: {e}");
                false
            }
        }
    }

    /// Persist new text for one item and leave edit mode.
    ///
    /// The remote call carries the merged item. On failure only the edit flag
    /// is cleared; the committed text is not rolled forward or back. Saving
    /// always exits edit mode.
    pub async fn save(&self, list: &mut Vec<Todo>, id: u32, new_text: &str) {
        let Some(existing) = state::find_todo(list, id) else {
            return;
        };
        let updated = Todo {
            text: new_text.to_string(),
            is_editing: false,
            ..existing.clone()
        };
        match self.api.update(&updated).await {
            Ok(()) => state::replace_todo(list, updated),
            Err(e) => {
                log::error!("failed to update todo {id}: {e}");
                state::clear_editing(list, id);
            }
        }
    }

    /// Optimistically remove one item, restoring the snapshot on failure.
    pub async fn delete(&self, list: &mut Vec<Todo>, id: u32) {
        let snapshot = list.clone();
        state::remove_todo(list, id);
        if let Err(e) = self.api.delete(id).await {
            log::error!("failed to delete todo {id}: {e}");
            *list = snapshot;
        }
    }

    /// Optimistically clear the list and delete every item remotely.
    ///
    /// Deletes are issued concurrently and joined. Any failure restores the
    /// full snapshot, including items whose own delete succeeded; those no
    /// longer exist remotely. Inherited behavior, kept as-is.
    pub async fn delete_all(&self, list: &mut Vec<Todo>) {
        if list.is_empty() {
            return;
        }
        let snapshot = std::mem::take(list);
        let results = join_all(snapshot.iter().map(|todo| self.api.delete(todo.id))).await;
        let failures = results.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            log::error!("delete-all: {failures} of {} deletes failed, restoring", snapshot.len());
            *list = snapshot;
        }
    }
}
