//! Todo Form Component
//!
//! Input row for creating items, with the bulk-delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::{use_app_context, use_controller};

/// New-item input (Enter or the Add button submits) plus Delete All.
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let controller = use_controller();

    let (input, set_input) = signal(String::new());

    let add_todo = {
        let controller = controller.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let text = input.get_untracked();
            if text.trim().is_empty() { return; }
            let controller = controller.clone();
            spawn_local(async move {
                let mut list = ctx.snapshot();
                if controller.add(&mut list, &text).await {
                    set_input.set(String::new());
                    ctx.publish(list);
                }
            });
        }
    };

    let delete_all = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            let mut list = ctx.snapshot();
            controller.delete_all(&mut list).await;
            ctx.publish(list);
        });
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Enter task..."
                prop:value=move || input.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_input.set(field.value());
                }
            />
            <button type="submit" class="add-btn">"Add"</button>
            <button
                type="button"
                class="delete-all-btn"
                prop:disabled=move || ctx.todos.get().is_empty()
                on:click=delete_all
            >
                "Delete All"
            </button>
        </form>
    }
}
