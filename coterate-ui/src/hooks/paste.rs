//! Clipboard paste handling: a window-level paste listener that delivers
//! pasted images as data URLs, plus the FileReader plumbing shared with the
//! drag-drop and browse-files paths.

use leptos::ev;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, File, FileReader};

/// Listen for paste events on the window and hand any pasted image to
/// `on_image` as a data URL. Non-image clipboard content is left alone.
pub fn use_paste_images(on_image: impl Fn(String) + Clone + 'static) {
    let _ = use_event_listener(
        use_window(),
        ev::Custom::<ClipboardEvent>::new("paste"),
        move |e: ClipboardEvent| {
            let Some(data) = e.clipboard_data() else {
                return;
            };
            let items = data.items();
            for i in 0..items.length() {
                let Some(item) = items.get(i) else {
                    continue;
                };
                if !item.type_().starts_with("image") {
                    continue;
                }
                if let Ok(Some(file)) = item.get_as_file() {
                    e.prevent_default();
                    read_image_to_data_url(file, on_image.clone());
                    break;
                }
            }
        },
    );
}

/// Read an image file to a data URL and deliver it to `on_done`. Read
/// failures are logged and dropped; the canvas stays untouched.
pub fn read_image_to_data_url(file: File, on_done: impl Fn(String) + 'static) {
    let Ok(reader) = FileReader::new() else {
        log::warn!("FileReader unavailable");
        return;
    };

    let reader_for_load = reader.clone();
    let onload = Closure::once(move |_e: web_sys::ProgressEvent| {
        match reader_for_load.result() {
            Ok(value) => {
                if let Some(data_url) = value.as_string() {
                    on_done(data_url);
                }
            }
            Err(e) => log::warn!("failed to read image: {e:?}"),
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        log::warn!("failed to start image read: {e:?}");
    }
}
