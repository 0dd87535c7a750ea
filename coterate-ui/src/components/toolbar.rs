//! Header bar: zoom controls with a scale readout, view reset, and the
//! Figma import entry point.

use crate::app::{measured_view, retry_reset, use_app_state};
use crate::config::ZOOM_STEP;
use leptos::*;

#[component]
pub fn Toolbar() -> impl IntoView {
    let state = use_app_state();
    let session = state.session;

    let scale_label = move || session.with(|s| format!("{:.0}%", s.viewport.scale * 100.0));

    let on_zoom_in = move |_| {
        session.update(|s| {
            let target = s.viewport.scale + ZOOM_STEP;
            s.viewport.set_scale(target, None);
        });
    };

    let on_zoom_out = move |_| {
        session.update(|s| {
            let target = s.viewport.scale - ZOOM_STEP;
            s.viewport.set_scale(target, None);
        });
    };

    let on_reset = move |_| {
        let Some(page_id) = state
            .pages
            .with_untracked(|p| p.current_page_id().map(str::to_string))
        else {
            return;
        };
        let view = measured_view(state.canvas_ref);
        let pending = state
            .session
            .try_update(|s| s.reset_view(&page_id, view))
            .unwrap_or(false);
        if pending {
            retry_reset(state, page_id);
        }
    };

    let on_figma_import = move |_| state.show_figma_dialog.set(true);

    let button_class = "px-3 py-1.5 rounded-lg border border-gray-200 bg-white text-sm \
                        font-semibold shadow-sm hover:bg-gray-50";

    view! {
        <div class="flex items-center justify-between h-[60px] px-5 bg-white \
                    border-b border-gray-200 shadow-sm z-10">
            <div class="flex items-center gap-1 font-semibold text-2xl">
                <div class="w-9 h-9 rounded-lg bg-blue-500 text-white flex items-center \
                            justify-center font-bold">"C"</div>
                "Coterate"
            </div>
            <div class="flex items-center gap-2">
                <button class=button_class on:click=on_zoom_out title="Zoom out">"-"</button>
                <span class="w-14 text-center text-sm text-gray-600">{scale_label}</span>
                <button class=button_class on:click=on_zoom_in title="Zoom in">"+"</button>
                <button class=button_class on:click=on_reset>"Reset view"</button>
                <button class=button_class on:click=on_figma_import>"Import from Figma"</button>
            </div>
        </div>
    }
}
