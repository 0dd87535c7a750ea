use leptos::*;

const TOAST_DURATION_MS: u64 = 2500;

/// Transient bottom-center notice. Shows whenever `message` changes to
/// `Some` and fades out after a short delay.
#[component]
pub fn Toast(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    let is_visible = create_rw_signal(false);
    let display_message = create_rw_signal(String::new());

    create_effect(move |_| {
        if let Some(text) = message.get() {
            display_message.set(text);
            is_visible.set(true);
            set_timeout(
                move || is_visible.set(false),
                std::time::Duration::from_millis(TOAST_DURATION_MS),
            );
        }
    });

    view! {
        <div
            class="fixed bottom-6 left-1/2 -translate-x-1/2 z-[200] \
                   bg-gray-900 text-white text-sm px-4 py-2 rounded-lg shadow-lg \
                   transition-opacity duration-300 pointer-events-none"
            class:opacity-100=move || is_visible.get()
            class:opacity-0=move || !is_visible.get()
        >
            {move || display_message.get()}
        </div>
    }
}
