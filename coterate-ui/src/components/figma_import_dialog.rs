//! Dialog for importing a design frame from a pasted Figma share link.
//!
//! The link is resolved by the `/api/figma` endpoint; a link without a
//! node id has no rendered frame image, which is surfaced inline rather
//! than placing an empty card.

use crate::api::figma::import_design;
use crate::app::{add_design, use_app_state};
use leptos::*;

#[component]
pub fn FigmaImportDialog() -> impl IntoView {
    let state = use_app_state();

    let link = create_rw_signal(String::new());
    let importing = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let close = move || {
        state.show_figma_dialog.set(false);
        error.set(None);
    };

    let on_import = move |_| {
        let url = link.get_untracked().trim().to_string();
        if url.is_empty() {
            error.set(Some("Paste a Figma file link first".to_string()));
            return;
        }
        importing.set(true);
        error.set(None);

        spawn_local(async move {
            match import_design(&url).await {
                Ok(data) => match data.image_url {
                    Some(image) => {
                        add_design(state, &image);
                        link.set(String::new());
                        state.show_figma_dialog.set(false);
                    }
                    None => {
                        error.set(Some(
                            "That link has no frame selected; copy a link with a node id"
                                .to_string(),
                        ));
                    }
                },
                Err(failure) => {
                    log::warn!("figma import failed: {failure}");
                    error.set(Some(failure.message));
                }
            }
            importing.set(false);
        });
    };

    view! {
        <Show when=move || state.show_figma_dialog.get()>
            <div
                class="fixed inset-0 z-[100] bg-black/40 flex items-center justify-center"
                on:click=move |_| close()
            >
                <div
                    class="bg-white rounded-xl shadow-2xl p-5 w-[460px] max-w-[90%] space-y-4"
                    on:click=|e| e.stop_propagation()
                >
                    <h3 class="text-base font-semibold">"Import from Figma"</h3>
                    <p class="text-sm text-gray-600">
                        "Paste a Figma file link. Select a frame in Figma and copy its \
                         link so the rendered frame can be imported."
                    </p>
                    <input
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 text-sm"
                        placeholder="https://www.figma.com/file/..."
                        prop:value=move || link.get()
                        on:input=move |e| link.set(event_target_value(&e))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="text-sm text-red-600">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <div class="flex gap-2">
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg border border-gray-300 \
                                   text-sm font-semibold hover:bg-gray-50"
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg bg-blue-600 text-white \
                                   text-sm font-semibold hover:bg-blue-700 \
                                   disabled:opacity-50"
                            disabled=move || importing.get()
                            on:click=on_import
                        >
                            {move || if importing.get() { "Importing..." } else { "Import" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
