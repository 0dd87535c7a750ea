//! The infinite canvas surface: pan/zoom pointer handling, the CSS
//! transform that places page content, drag-drop and browse-files upload,
//! and the empty-page overlay.

use crate::app::{add_design, use_app_state};
use crate::components::design_card::DesignCard;
use crate::config::{GRID_SIZE_PX, WHEEL_ZOOM_SENSITIVITY};
use crate::hooks::read_image_to_data_url;
use coterate_core::{Mode, Point, PointerTarget};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

fn pointer_position(e: &web_sys::PointerEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

#[component]
pub fn CanvasArea() -> impl IntoView {
    let state = use_app_state();
    let session = state.session;
    let cards = state.cards;
    let pages = state.pages;

    let file_input = create_node_ref::<html::Input>();

    let current_page_id =
        create_memo(move |_| pages.with(|p| p.current_page_id().map(str::to_string)));

    // Cards visible on the current page, in insertion order.
    let card_ids = create_memo(move |_| match current_page_id.get() {
        Some(page_id) => cards.with(|c| {
            c.cards_for_page(&page_id)
                .map(|card| card.id.clone())
                .collect::<Vec<_>>()
        }),
        None => Vec::new(),
    });
    let page_is_empty = create_memo(move |_| card_ids.with(|ids| ids.is_empty()));

    // translate + scale with origin (0, 0); canvas coordinates are
    // screen = canvas * scale + offset.
    let transform_style = move || {
        session.with(|s| {
            format!(
                "transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
                s.viewport.offset.x, s.viewport.offset.y, s.viewport.scale
            )
        })
    };

    // The dot grid scales with the zoom so it reads as part of the canvas.
    let grid_style = move || {
        session.with(|s| {
            let cell = GRID_SIZE_PX * s.viewport.scale;
            format!(
                "background-size: {cell}px {cell}px; background-image: \
                 linear-gradient(rgba(150, 150, 150, 0.1) 1px, transparent 1px), \
                 linear-gradient(90deg, rgba(150, 150, 150, 0.1) 1px, transparent 1px);"
            )
        })
    };

    let on_pointer_down = move |e: web_sys::PointerEvent| {
        if e.button() != 0 {
            return;
        }
        session.update(|s| s.pointer_down(PointerTarget::Canvas, pointer_position(&e)));
    };

    let on_pointer_move = move |e: web_sys::PointerEvent| {
        // Hot path: skip the signal writes entirely while idle.
        if session.with_untracked(|s| matches!(s.mode(), Mode::Idle)) {
            return;
        }
        let at = pointer_position(&e);
        cards.update(|c| session.update(|s| s.pointer_move(at, c)));
    };

    let end_gesture = move |_| session.update(|s| s.pointer_up());

    // Wheel zoom, additive in scale and anchored at the transform origin.
    let on_wheel = move |e: web_sys::WheelEvent| {
        e.prevent_default();
        let delta = -e.delta_y() * WHEEL_ZOOM_SENSITIVITY;
        session.update(|s| {
            let target = s.viewport.scale + delta;
            s.viewport.set_scale(target, None);
        });
    };

    let on_drag_over = move |e: web_sys::DragEvent| e.prevent_default();

    let on_drop = move |e: web_sys::DragEvent| {
        e.prevent_default();
        let Some(files) = e.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if let Some(file) = files.get(0) {
            if file.type_().starts_with("image/") {
                read_image_to_data_url(file, move |url| add_design(state, &url));
            }
        }
    };

    let on_browse_click = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_file_selected = move |e: web_sys::Event| {
        let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            if file.type_().starts_with("image/") {
                read_image_to_data_url(file, move |url| add_design(state, &url));
            }
        }
        input.set_value("");
    };

    let canvas_ref = state.canvas_ref;

    view! {
        <div
            node_ref=canvas_ref
            class="relative flex-1 overflow-hidden bg-gray-100 select-none cursor-grab active:cursor-grabbing"
            style=grid_style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=end_gesture
            on:pointerleave=end_gesture
            on:wheel=on_wheel
            on:dragover=on_drag_over
            on:drop=on_drop
        >
            <div class="absolute" style=transform_style>
                <For
                    each=move || card_ids.get()
                    key=|id| id.clone()
                    children=move |id| view! { <DesignCard card_id=id/> }
                />
            </div>

            <Show when=move || page_is_empty.get()>
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 \
                            flex flex-col items-center text-center bg-white rounded-xl \
                            shadow-lg px-10 py-10 w-[500px] max-w-[90%] pointer-events-auto">
                    <h2 class="text-2xl font-semibold mb-4">"Upload your design"</h2>
                    <p class="text-gray-500">
                        "Drag & drop an image, paste from clipboard, or "
                        <span
                            class="text-blue-500 underline cursor-pointer"
                            on:click=on_browse_click
                        >
                            "browse files"
                        </span>
                    </p>
                </div>
            </Show>

            <input
                node_ref=file_input
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_file_selected
            />
        </div>
    }
}
