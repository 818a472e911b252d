//! Todo List Component
//!
//! Renders the list in arrival order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.todos.get()
                // Key on the mutable fields so text edits and mode flips
                // re-render the row
                key=|todo| (todo.id, todo.text.clone(), todo.is_editing)
                children=|todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
        <p class="item-count">
            {move || format!("{} items", ctx.todos.get().len())}
        </p>
    }
}
