//! Todo App Root
//!
//! Main application component: owns the list signal, provides context,
//! and runs the initial load.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::components::{TodoForm, TodoList};
use crate::config;
use crate::context::{use_controller, AppContext};
use crate::controller::TodoController;
use crate::models::Todo;

#[component]
pub fn App() -> impl IntoView {
    let (todos, set_todos) = signal(Vec::<Todo>::new());

    // Provide context to all children
    provide_context(AppContext::new((todos, set_todos)));
    provide_context(TodoController::new(HttpTodoApi::new(config::api_url())));

    let controller = use_controller();

    // Load the collection on mount
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            let loaded = controller.load().await;
            set_todos.set(loaded);
        });
    });

    view! {
        <div class="todo-app">
            <h1>"📝 To-Do List"</h1>
            <TodoForm />
            <TodoList />
        </div>
    }
}
