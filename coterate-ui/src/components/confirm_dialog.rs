//! Centered modal dialog for confirming destructive actions.

use leptos::*;

#[component]
pub fn ConfirmDialog(
    /// Whether the dialog is visible
    #[prop(into)]
    visible: Signal<bool>,
    /// Dialog title
    #[prop(into)]
    title: String,
    /// Dialog message (reactive, so it can name the thing being deleted)
    #[prop(into)]
    message: Signal<String>,
    /// Cancel button label
    #[prop(into)]
    cancel_label: String,
    /// Confirm button label (e.g., "Delete")
    #[prop(into)]
    confirm_label: String,
    /// Called when cancel is clicked (or the backdrop)
    on_cancel: Callback<()>,
    /// Called when confirm is clicked
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div
                class="fixed inset-0 z-[100] bg-black/40 flex items-center justify-center"
                on:click=move |_| on_cancel.call(())
            >
                <div
                    class="bg-white rounded-xl shadow-2xl p-5 max-w-sm mx-4 space-y-4"
                    on:click=|e| e.stop_propagation()
                >
                    <h3 class="text-base font-semibold">{title.clone()}</h3>
                    <p class="text-sm text-gray-600">{move || message.get()}</p>
                    <div class="flex gap-2">
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg border border-gray-300 \
                                   text-sm font-semibold hover:bg-gray-50"
                            on:click=move |_| on_cancel.call(())
                        >
                            {cancel_label.clone()}
                        </button>
                        <button
                            class="flex-1 px-3 py-1.5 rounded-lg bg-red-600 text-white \
                                   text-sm font-semibold hover:bg-red-700"
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
