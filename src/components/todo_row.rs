//! Todo Row Component
//!
//! A single item: view mode with Edit/Delete, or edit mode with a buffered
//! input and Save. The edit buffer is row-local and distinct from the
//! committed text until Save runs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::{use_app_context, use_controller};
use crate::models::Todo;
use crate::state;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let controller = use_controller();

    let id = todo.id;
    let is_editing = todo.is_editing;
    let text = todo.text.clone();

    // Seeded with the committed text when the row enters edit mode
    let (buffer, set_buffer) = signal(todo.text.clone());

    let toggle_edit = move |_| {
        let mut list = ctx.snapshot();
        state::toggle_edit(&mut list, id);
        ctx.publish(list);
    };

    let save = {
        let controller = controller.clone();
        move || {
            let new_text = buffer.get_untracked();
            let controller = controller.clone();
            spawn_local(async move {
                let mut list = ctx.snapshot();
                controller.save(&mut list, id, &new_text).await;
                ctx.publish(list);
            });
        }
    };
    let save_on_key = save.clone();

    let delete = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                let mut list = ctx.snapshot();
                controller.delete(&mut list, id).await;
                ctx.publish(list);
            });
        }
    };

    view! {
        <li class="todo-row">
            {if is_editing {
                view! {
                    <span class="todo-main">
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=move || buffer.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_buffer.set(field.value());
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    save_on_key();
                                }
                            }
                        />
                        <button class="save-btn" on:click=move |_| save()>"Save"</button>
                    </span>
                }.into_any()
            } else {
                view! {
                    <span class="todo-main">
                        <span class="todo-text">{text}</span>
                        <button class="edit-btn" on:click=toggle_edit>"Edit"</button>
                    </span>
                }.into_any()
            }}
            <button class="delete-btn" on:click=delete>"Delete"</button>
        </li>
    }
}
