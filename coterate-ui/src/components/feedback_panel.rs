//! Side panel showing the AI feedback for the selected card.

use crate::app::use_app_state;
use leptos::*;

#[component]
pub fn FeedbackPanel() -> impl IntoView {
    let state = use_app_state();

    let feedback = create_memo(move |_| {
        let selected = state
            .session
            .with(|s| s.selected_card().map(str::to_string))?;
        state
            .cards
            .with(|c| c.get(&selected).and_then(|card| card.feedback.clone()))
    });

    let visible = move || state.show_feedback.get() && feedback.get().is_some();

    view! {
        <Show when=visible>
            <div class="absolute top-0 right-0 bottom-0 w-96 max-w-full bg-white \
                        border-l border-gray-200 shadow-xl z-20 flex flex-col">
                <div class="flex items-center justify-between px-4 py-3 border-b \
                            border-gray-200">
                    <h3 class="font-semibold">"Design feedback"</h3>
                    <button
                        class="text-gray-400 hover:text-gray-600"
                        on:click=move |_| state.show_feedback.set(false)
                    >
                        "Close"
                    </button>
                </div>
                <div class="flex-1 overflow-y-auto px-4 py-3 text-sm text-gray-700 \
                            whitespace-pre-wrap">
                    {move || feedback.get().unwrap_or_default()}
                </div>
            </div>
        </Show>
    }
}
