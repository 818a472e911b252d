//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::controller::TodoController;
use crate::models::Todo;

/// Controller type used by the UI.
pub type AppController = TodoController<HttpTodoApi>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The todo list - read
    pub todos: ReadSignal<Vec<Todo>>,
    /// The todo list - write
    set_todos: WriteSignal<Vec<Todo>>,
}

impl AppContext {
    pub fn new(todos: (ReadSignal<Vec<Todo>>, WriteSignal<Vec<Todo>>)) -> Self {
        Self {
            todos: todos.0,
            set_todos: todos.1,
        }
    }

    /// Latest list state at invocation time. Handlers mutate their own copy
    /// and publish it back, so concurrent handlers race last-writer-wins.
    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.get_untracked()
    }

    /// Replace the rendered list.
    pub fn publish(&self, list: Vec<Todo>) {
        self.set_todos.set(list);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_controller() -> AppController {
    expect_context::<AppController>()
}
