use crate::cards::CardRegistry;
use crate::points::Point;
use crate::viewport::{Viewport, ViewportMap};

/// What the initiating pointer-down landed on.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Canvas,
    Card(String),
}

/// Explicit interaction mode guarding all pointer-move handling.
///
/// Canvas panning and card dragging are mutually exclusive by construction:
/// the mode is chosen once, at pointer-down, from what the pointer landed on.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    PanningCanvas {
        last: Point,
    },
    DraggingCard {
        id: String,
        last: Point,
    },
}

/// Per-canvas interaction state: the live viewport, per-page saved viewports,
/// card selection, and the current pointer mode.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub viewport: Viewport,
    saved: ViewportMap,
    selected: Option<String>,
    mode: Mode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_card(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_dragging_card(&self, id: &str) -> bool {
        matches!(&self.mode, Mode::DraggingCard { id: drag_id, .. } if drag_id == id)
    }

    /// Handle pointer-down at a screen point.
    ///
    /// On the canvas background: clear the selection and start panning.
    /// On a card: the first click selects it; pointer-down on the card that
    /// is already selected begins a move.
    pub fn pointer_down(&mut self, target: PointerTarget, at: Point) {
        match target {
            PointerTarget::Canvas => {
                self.selected = None;
                self.mode = Mode::PanningCanvas { last: at };
            }
            PointerTarget::Card(id) => {
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.mode = Mode::DraggingCard { id, last: at };
                } else {
                    self.selected = Some(id);
                    self.mode = Mode::Idle;
                }
            }
        }
    }

    /// Handle pointer movement to a new screen point. Pure arithmetic; this
    /// is the hot path.
    ///
    /// Panning applies the raw screen delta to the viewport offset. A card
    /// drag converts the delta to canvas space (divide by scale) before
    /// moving the card, so movement speed is correct at any zoom.
    pub fn pointer_move(&mut self, at: Point, registry: &mut CardRegistry) {
        match &mut self.mode {
            Mode::Idle => {}
            Mode::PanningCanvas { last } => {
                let delta = at.sub(last);
                *last = at;
                self.viewport.pan(delta.x, delta.y);
            }
            Mode::DraggingCard { id, last } => {
                let delta = at.sub(last);
                *last = at;
                let id = id.clone();
                let canvas_delta = delta.scale(1.0 / self.viewport.scale);
                registry.move_card(&id, canvas_delta);
            }
        }
    }

    /// Release ends whichever gesture was active.
    pub fn pointer_up(&mut self) {
        self.mode = Mode::Idle;
    }

    /// Explicit page-switch transition: remember the view of the page being
    /// left, then restore the view last seen on the new page, or reset when
    /// the new page has no saved view.
    ///
    /// Returns `true` when the reset could not run because the view size is
    /// not measured yet; the caller retries [`Session::reset_view`] on the
    /// next animation frame.
    #[must_use]
    pub fn switch_page(
        &mut self,
        old_page_id: Option<&str>,
        new_page_id: &str,
        view: Option<(f64, f64)>,
    ) -> bool {
        if let Some(old) = old_page_id {
            self.saved.save(old, self.viewport);
        }
        self.mode = Mode::Idle;
        self.selected = None;
        match self.saved.restore(new_page_id) {
            Some(vp) => {
                self.viewport = vp;
                false
            }
            None => !self.viewport.reset(view),
        }
    }

    /// Drop the saved viewport of a page that no longer exists, so the map
    /// does not accumulate entries for deleted pages.
    pub fn forget_page(&mut self, page_id: &str) {
        self.saved.clear(page_id);
    }

    /// Reset the view for a page and forget its saved position so the reset
    /// is not shadowed on the next switch. Returns `true` when a retry is
    /// still needed (view not measured).
    #[must_use]
    pub fn reset_view(&mut self, page_id: &str, view: Option<(f64, f64)>) -> bool {
        let done = self.viewport.reset(view);
        if done {
            self.saved.clear(page_id);
        }
        !done
    }
}
