use crate::components::{
    CanvasArea, FeedbackPanel, FigmaImportDialog, Sidebar, Toast, Toolbar,
};
use crate::hooks::use_paste_images;
use coterate_core::{CardRegistry, PageStore, Point, Session};
use leptos::html::Div;
use leptos::*;

/// Shared application state: the page/card/viewport containers, owned by
/// signals and passed to consumers through context (no process-wide
/// singletons).
#[derive(Clone, Copy)]
pub struct AppState {
    pub pages: RwSignal<PageStore>,
    pub cards: RwSignal<CardRegistry>,
    pub session: RwSignal<Session>,
    /// Feedback side panel visibility.
    pub show_feedback: RwSignal<bool>,
    /// Figma import dialog visibility.
    pub show_figma_dialog: RwSignal<bool>,
    /// Transient error message for the toast.
    pub toast: RwSignal<Option<String>>,
    /// The canvas surface, measured for viewport resets and drop positions.
    pub canvas_ref: NodeRef<Div>,
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Current ISO-8601 timestamp from the browser clock.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Measured size of the canvas surface, if it is mounted and laid out.
pub fn measured_view(canvas_ref: NodeRef<Div>) -> Option<(f64, f64)> {
    let el = canvas_ref.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    (rect.width() > 0.0 && rect.height() > 0.0).then(|| (rect.width(), rect.height()))
}

/// Keep retrying a deferred viewport reset, one animation frame at a time,
/// until the canvas has measurable dimensions. Abandons the retry if the
/// user has already moved on to another page.
pub fn retry_reset(state: AppState, page_id: String) {
    request_animation_frame(move || {
        let still_current = state
            .pages
            .with_untracked(|p| p.current_page_id() == Some(page_id.as_str()));
        if !still_current {
            return;
        }
        let view = measured_view(state.canvas_ref);
        let pending = state
            .session
            .try_update(|s| s.reset_view(&page_id, view))
            .unwrap_or(false);
        if pending {
            retry_reset(state, page_id);
        }
    });
}

/// The explicit page-switch transition: activate the page, save the old
/// page's viewport, restore or reset the new one.
pub fn switch_to_page(state: AppState, page_id: &str) {
    let old = state
        .pages
        .with_untracked(|p| p.current_page_id().map(str::to_string));
    if old.as_deref() == Some(page_id) {
        return;
    }
    let switched = state
        .pages
        .try_update(|p| p.set_current_page(page_id))
        .unwrap_or(false);
    if !switched {
        log::warn!("ignoring switch to unknown page {page_id}");
        return;
    }
    let view = measured_view(state.canvas_ref);
    let pending = state
        .session
        .try_update(|s| s.switch_page(old.as_deref(), page_id, view))
        .unwrap_or(false);
    if pending {
        retry_reset(state, page_id.to_string());
    }
    state.show_feedback.set(false);
}

/// Create a page and move to it.
pub fn create_page(state: AppState) {
    let old = state
        .pages
        .with_untracked(|p| p.current_page_id().map(str::to_string));
    let Some(new_id) = state
        .pages
        .try_update(|p| p.add_page(crate::config::NEW_PAGE_NAME).id.clone())
    else {
        return;
    };
    let view = measured_view(state.canvas_ref);
    let pending = state
        .session
        .try_update(|s| s.switch_page(old.as_deref(), &new_id, view))
        .unwrap_or(false);
    if pending {
        retry_reset(state, new_id);
    }
    state.show_feedback.set(false);
}

/// Delete a page. If it was active, the store activates the first remaining
/// page and the view follows it (the deleted page's viewport is not saved).
pub fn remove_page(state: AppState, page_id: &str) {
    let was_current = state
        .pages
        .with_untracked(|p| p.current_page_id() == Some(page_id));
    state.pages.update(|p| p.delete_page(page_id));
    state.session.update(|s| s.forget_page(page_id));
    if !was_current {
        return;
    }
    state.show_feedback.set(false);
    let next = state
        .pages
        .with_untracked(|p| p.current_page_id().map(str::to_string));
    if let Some(next) = next {
        let view = measured_view(state.canvas_ref);
        let pending = state
            .session
            .try_update(|s| s.switch_page(None, &next, view))
            .unwrap_or(false);
        if pending {
            retry_reset(state, next);
        }
    }
}

/// Place a new design on the current page, dropped at the visible center of
/// the canvas (converted to canvas coordinates).
pub fn add_design(state: AppState, image_url: &str) {
    let Some(page_id) = state
        .pages
        .with_untracked(|p| p.current_page_id().map(str::to_string))
    else {
        state
            .toast
            .set(Some("Create a page before adding designs".to_string()));
        return;
    };
    let center = measured_view(state.canvas_ref)
        .map(|(w, h)| Point::new(w / 2.0, h / 2.0))
        .unwrap_or(Point::ZERO);
    let position = state
        .session
        .with_untracked(|s| s.viewport.screen_to_canvas(center));
    let timestamp = now_iso();
    state.cards.update(|c| {
        c.add_card(&page_id, image_url, position, &timestamp);
    });
}

/// Request AI feedback for a card. The per-card in-flight guard rejects a
/// second request while one is outstanding; failures settle the guard
/// without touching the rest of the card.
pub fn analyze_card(state: AppState, card_id: String) {
    let Some(image_url) = state
        .cards
        .with_untracked(|c| c.get(&card_id).map(|card| card.image_url.clone()))
    else {
        return;
    };
    match state.cards.try_update(|c| c.begin_analysis(&card_id)) {
        Some(Ok(())) => {}
        Some(Err(err)) => {
            log::info!("analysis not started: {err}");
            return;
        }
        None => return,
    }

    spawn_local(async move {
        match crate::api::analyze::request_feedback(&image_url).await {
            Ok(feedback) => {
                state.cards.update(|c| c.attach_feedback(&card_id, &feedback));
                state.show_feedback.set(true);
            }
            Err(failure) => {
                log::warn!("analysis failed for {card_id}: {failure}");
                state.cards.update(|c| c.fail_analysis(&card_id));
                state
                    .toast
                    .set(Some(format!("Analysis failed: {failure}")));
            }
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState {
        pages: create_rw_signal(PageStore::new()),
        cards: create_rw_signal(CardRegistry::new()),
        session: create_rw_signal(Session::new()),
        show_feedback: create_rw_signal(false),
        show_figma_dialog: create_rw_signal(false),
        toast: create_rw_signal(None),
        canvas_ref: create_node_ref::<Div>(),
    };
    provide_context(state);

    // Pasted images land on the current page.
    use_paste_images(move |data_url| add_design(state, &data_url));

    // Center the default page's view once the canvas is measured.
    if let Some(page_id) = state
        .pages
        .with_untracked(|p| p.current_page_id().map(str::to_string))
    {
        retry_reset(state, page_id);
    }

    view! {
        <div class="flex w-screen h-screen overflow-hidden bg-gray-100 text-gray-800">
            <Sidebar/>
            <div class="relative flex flex-col flex-1 min-w-0">
                <Toolbar/>
                <CanvasArea/>
                <FeedbackPanel/>
            </div>
            <FigmaImportDialog/>
            <Toast message=state.toast/>
        </div>
    }
}
