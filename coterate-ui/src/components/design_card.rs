//! One placed design screenshot: selection ring, drag handling, and the
//! Analyze affordance with its loading state.

use crate::app::{analyze_card, use_app_state};
use coterate_core::{Point, PointerTarget};
use leptos::*;

#[component]
pub fn DesignCard(card_id: String) -> impl IntoView {
    let state = use_app_state();
    let id = store_value(card_id);

    // Everything about the card is read reactively from the registry, so
    // drags and feedback updates flow through without re-keying the list.
    let card = create_memo(move |_| state.cards.with(|c| c.get(&id.get_value()).cloned()));
    let selected = create_memo(move |_| {
        state
            .session
            .with(|s| s.selected_card() == Some(id.get_value().as_str()))
    });
    let dragging =
        create_memo(move |_| state.session.with(|s| s.is_dragging_card(&id.get_value())));

    let position_style = move || {
        card.get()
            .map(|c| {
                format!(
                    "transform: translate({}px, {}px);",
                    c.position.x, c.position.y
                )
            })
            .unwrap_or_default()
    };

    let card_class = move || {
        let mut class = String::from(
            "absolute flex flex-col items-center bg-white rounded-lg shadow-md p-4 \
             max-w-xl border-2 transition-shadow",
        );
        if selected.get() {
            // Selected cards show a move cursor: the next press starts a drag.
            class.push_str(" border-blue-600 cursor-move shadow-lg");
        } else {
            class.push_str(" border-transparent cursor-pointer hover:shadow-lg");
        }
        if dragging.get() {
            class.push_str(" opacity-90 shadow-2xl");
        }
        class
    };

    let on_pointer_down = move |e: web_sys::PointerEvent| {
        if e.button() != 0 {
            return;
        }
        // The card, not the canvas, owns this gesture.
        e.stop_propagation();
        let at = Point::new(e.client_x() as f64, e.client_y() as f64);
        state
            .session
            .update(|s| s.pointer_down(PointerTarget::Card(id.get_value()), at));
    };

    let can_analyze = move || card.get().map(|c| c.can_analyze()).unwrap_or(false);
    let analysis_pending = move || card.get().map(|c| c.analysis_pending).unwrap_or(false);
    let has_feedback = move || card.get().map(|c| c.feedback.is_some()).unwrap_or(false);

    let on_analyze = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        analyze_card(state, id.get_value());
    };

    let on_view_feedback = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        state.show_feedback.set(true);
    };

    view! {
        <div class=card_class style=position_style on:pointerdown=on_pointer_down>
            <div class="text-sm font-semibold text-gray-500 mb-3">
                {move || card.get().map(|c| c.label).unwrap_or_default()}
            </div>
            <img
                class="max-w-full rounded pointer-events-none"
                draggable="false"
                src=move || card.get().map(|c| c.image_url).unwrap_or_default()
            />

            <Show when=move || selected.get()>
                <div class="flex gap-2 mt-3">
                    <Show when=can_analyze>
                        <button
                            class="px-3 py-1.5 rounded-lg bg-blue-600 text-white text-sm \
                                   font-semibold hover:bg-blue-700"
                            on:click=on_analyze
                        >
                            "Analyze"
                        </button>
                    </Show>
                    <Show when=has_feedback>
                        <button
                            class="px-3 py-1.5 rounded-lg border border-gray-300 text-sm \
                                   font-semibold hover:bg-gray-50"
                            on:click=on_view_feedback
                        >
                            "View feedback"
                        </button>
                    </Show>
                </div>
            </Show>

            <Show when=analysis_pending>
                <div class="absolute inset-0 flex flex-col items-center justify-center \
                            bg-white/80 rounded-lg">
                    <div class="w-8 h-8 rounded-full border-4 border-gray-200 \
                                border-t-blue-500 animate-spin mb-2"></div>
                    <p class="text-sm text-gray-600">"Analyzing your design..."</p>
                </div>
            </Show>
        </div>
    }
}
