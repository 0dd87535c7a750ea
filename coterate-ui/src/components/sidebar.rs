//! Page list: select, create, inline rename, and delete with confirmation.

use crate::app::{create_page, remove_page, switch_to_page, use_app_state};
use crate::components::confirm_dialog::ConfirmDialog;
use leptos::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_app_state();
    let pages = state.pages;

    let page_ids = create_memo(move |_| {
        pages.with(|p| p.pages().iter().map(|pg| pg.id.clone()).collect::<Vec<_>>())
    });

    // Page id pending delete confirmation, if any.
    let confirm_delete = create_rw_signal(None::<String>);
    let delete_message = create_memo(move |_| {
        let Some(id) = confirm_delete.get() else {
            return String::new();
        };
        let name = pages.with(|p| {
            p.pages()
                .iter()
                .find(|pg| pg.id == id)
                .map(|pg| pg.name.clone())
                .unwrap_or_default()
        });
        format!("Delete \"{name}\"? Its designs will no longer be shown.")
    });

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(id) = confirm_delete.get_untracked() {
            remove_page(state, &id);
        }
        confirm_delete.set(None);
    });
    let on_cancel_delete = Callback::new(move |_| confirm_delete.set(None));

    view! {
        <div class="flex flex-col w-60 shrink-0 h-full bg-white border-r border-gray-200">
            <div class="px-4 py-3 text-xs font-semibold uppercase tracking-wide text-gray-400">
                "Pages"
            </div>
            <div class="flex-1 overflow-y-auto">
                <For
                    each=move || page_ids.get()
                    key=|id| id.clone()
                    children=move |id| {
                        view! { <PageRow page_id=id confirm_delete=confirm_delete/> }
                    }
                />
            </div>
            <button
                class="m-3 px-3 py-2 rounded-lg border border-dashed border-gray-300 \
                       text-sm text-gray-500 hover:bg-gray-50"
                on:click=move |_| create_page(state)
            >
                "+ New Page"
            </button>

            <ConfirmDialog
                visible=Signal::derive(move || confirm_delete.get().is_some())
                title="Delete page"
                message=delete_message
                cancel_label="Cancel"
                confirm_label="Delete"
                on_cancel=on_cancel_delete
                on_confirm=on_confirm_delete
            />
        </div>
    }
}

#[component]
fn PageRow(page_id: String, confirm_delete: RwSignal<Option<String>>) -> impl IntoView {
    let state = use_app_state();
    let pages = state.pages;
    let id = store_value(page_id);

    let name = create_memo(move |_| {
        pages.with(|p| {
            p.pages()
                .iter()
                .find(|pg| pg.id == id.get_value())
                .map(|pg| pg.name.clone())
                .unwrap_or_default()
        })
    });
    let is_active = create_memo(move |_| {
        pages.with(|p| p.current_page_id() == Some(id.get_value().as_str()))
    });

    // Inline rename: double-click to edit, Enter/blur commits, Escape drops.
    let editing = create_rw_signal(false);
    let draft = create_rw_signal(String::new());

    let start_editing = move |_| {
        draft.set(name.get_untracked());
        editing.set(true);
    };

    let commit = move || {
        editing.set(false);
        // rename_page ignores names that trim to empty.
        pages.update(|p| p.rename_page(&id.get_value(), &draft.get_untracked()));
    };

    let on_key_down = move |e: web_sys::KeyboardEvent| match e.key().as_str() {
        "Enter" => commit(),
        "Escape" => editing.set(false),
        _ => {}
    };

    let row_class = move || {
        if is_active.get() {
            "group flex items-center justify-between px-4 py-2 bg-gray-100 \
             font-semibold cursor-pointer"
        } else {
            "group flex items-center justify-between px-4 py-2 hover:bg-gray-50 \
             cursor-pointer"
        }
    };

    let on_request_delete = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        confirm_delete.set(Some(id.get_value()));
    };

    view! {
        <div
            class=row_class
            on:click=move |_| switch_to_page(state, &id.get_value())
            on:dblclick=start_editing
        >
            <Show
                when=move || editing.get()
                fallback=move || view! { <span class="truncate text-sm">{name}</span> }
            >
                <input
                    class="w-full text-sm border border-blue-400 rounded px-1 py-0.5"
                    prop:value=move || draft.get()
                    on:input=move |e| draft.set(event_target_value(&e))
                    on:keydown=on_key_down
                    on:blur=move |_| commit()
                    on:click=|e| e.stop_propagation()
                />
            </Show>
            <button
                class="hidden group-hover:block text-gray-400 hover:text-red-500 text-sm ml-2"
                title="Delete page"
                on:click=on_request_delete
            >
                "x"
            </button>
        </div>
    }
}
