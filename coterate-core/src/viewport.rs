use crate::points::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Smallest permitted zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Largest permitted zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// On reset, content is placed above-center: half the view width across,
/// one third of the view height down.
const RESET_VERTICAL_FRACTION: f64 = 3.0;

/// Pan offset and zoom scale applied to the canvas content area.
///
/// The transform maps canvas-space coordinates to screen space as
/// `screen = canvas * scale + offset`, with the transform origin at (0, 0).
/// There are no pan bounds (infinite canvas); scale is clamped to
/// `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub offset: Point,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            scale: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(offset: Point, scale: f64) -> Self {
        Self {
            offset,
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    /// Translate the view by a screen-space delta. Unbounded.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Multiply the scale by `factor`, clamped to `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// With an `anchor` (a screen-space point), the canvas point under the
    /// anchor stays fixed on screen. With `None` the zoom is anchored at the
    /// transform origin, so the visual center of focus shifts.
    pub fn zoom(&mut self, factor: f64, anchor: Option<Point>) {
        self.set_scale(self.scale * factor, anchor);
    }

    /// Set the scale to an absolute value, clamped, with the same anchoring
    /// rules as [`Viewport::zoom`]. Backs wheel zoom (`scale - 0.01 * deltaY`
    /// in the UI layer) and the toolbar step buttons.
    pub fn set_scale(&mut self, target: f64, anchor: Option<Point>) {
        let old = self.scale;
        let new = target.clamp(MIN_SCALE, MAX_SCALE);
        if let Some(anchor) = anchor {
            // Keep the anchored content point stationary:
            // offset' = anchor - (anchor - offset) * (scale'/scale)
            let ratio = new / old;
            self.offset = anchor.sub(&anchor.sub(&self.offset).scale(ratio));
        }
        self.scale = new;
    }

    /// Convert a screen-space point to canvas space.
    pub fn screen_to_canvas(&self, p: Point) -> Point {
        p.sub(&self.offset).scale(1.0 / self.scale)
    }

    /// Convert a canvas-space point to screen space.
    pub fn canvas_to_screen(&self, p: Point) -> Point {
        p.scale(self.scale).add(&self.offset)
    }

    /// Reset to scale 1 with the offset derived from the measured view size
    /// (half width, one third height) so content appears above-center.
    ///
    /// Returns `false`, leaving the viewport untouched, when the view has no
    /// measured dimensions yet (element not mounted); the caller should retry
    /// on the next animation frame.
    #[must_use]
    pub fn reset(&mut self, view: Option<(f64, f64)>) -> bool {
        let Some((width, height)) = view else {
            return false;
        };
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.offset = Point::new(width / 2.0, height / RESET_VERTICAL_FRACTION);
        self.scale = 1.0;
        true
    }
}

/// Last-seen viewport per page, so switching pages restores the previous
/// view. Session-scoped only; never persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewportMap {
    saved: HashMap<String, Viewport>,
}

impl ViewportMap {
    pub fn save(&mut self, page_id: &str, viewport: Viewport) {
        self.saved.insert(page_id.to_string(), viewport);
    }

    pub fn restore(&self, page_id: &str) -> Option<Viewport> {
        self.saved.get(page_id).copied()
    }

    /// Drop the saved entry for a page. Reset uses this so the reset view is
    /// not immediately shadowed by a stale saved position.
    pub fn clear(&mut self, page_id: &str) {
        self.saved.remove(page_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // pan() tests
    // ============================================================================

    #[test]
    fn pan_accumulates_screen_deltas() {
        let mut vp = Viewport::default();
        vp.pan(10.0, -5.0);
        vp.pan(2.5, 2.5);
        assert_eq!(vp.offset, Point::new(12.5, -2.5));
        assert_eq!(vp.scale, 1.0);
    }

    #[test]
    fn pan_is_unbounded() {
        let mut vp = Viewport::default();
        vp.pan(-1e9, 1e9);
        assert_eq!(vp.offset, Point::new(-1e9, 1e9));
    }

    // ============================================================================
    // zoom() clamping tests
    // ============================================================================

    #[test]
    fn zoom_clamps_to_max_scale() {
        let mut vp = Viewport::default();
        vp.zoom(1000.0, None);
        assert_eq!(vp.scale, MAX_SCALE);
    }

    #[test]
    fn zoom_clamps_to_min_scale() {
        let mut vp = Viewport::default();
        vp.zoom(1e-6, None);
        assert_eq!(vp.scale, MIN_SCALE);
    }

    #[test]
    fn zoom_output_always_within_bounds() {
        for factor in [0.0, 1e-9, 0.5, 1.0, 2.0, 4.9, 50.0, 1e12] {
            let mut vp = Viewport::default();
            vp.zoom(factor, None);
            assert!(vp.scale >= MIN_SCALE && vp.scale <= MAX_SCALE);
        }
    }

    #[test]
    fn zoom_without_anchor_leaves_offset_untouched() {
        let mut vp = Viewport::new(Point::new(40.0, 60.0), 1.0);
        vp.zoom(2.0, None);
        assert_eq!(vp.offset, Point::new(40.0, 60.0));
        assert_eq!(vp.scale, 2.0);
    }

    #[test]
    fn zoom_with_anchor_keeps_anchored_point_fixed() {
        let mut vp = Viewport::new(Point::new(100.0, 50.0), 1.0);
        let anchor = Point::new(300.0, 200.0);
        let canvas_under_anchor = vp.screen_to_canvas(anchor);

        vp.zoom(2.0, Some(anchor));

        let back_on_screen = vp.canvas_to_screen(canvas_under_anchor);
        assert!((back_on_screen.x - anchor.x).abs() < 1e-9);
        assert!((back_on_screen.y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn set_scale_steps_compose_with_clamping() {
        let mut vp = Viewport::default();
        // Toolbar step-out repeated past the minimum.
        for _ in 0..20 {
            vp.set_scale(vp.scale - 0.1, None);
        }
        assert_eq!(vp.scale, MIN_SCALE);
    }

    // ============================================================================
    // Coordinate conversion tests
    // ============================================================================

    #[test]
    fn screen_to_canvas_inverts_canvas_to_screen() {
        let vp = Viewport::new(Point::new(-30.0, 12.0), 2.5);
        let canvas = Point::new(17.0, -4.0);
        let roundtrip = vp.screen_to_canvas(vp.canvas_to_screen(canvas));
        assert!((roundtrip.x - canvas.x).abs() < 1e-12);
        assert!((roundtrip.y - canvas.y).abs() < 1e-12);
    }

    #[test]
    fn screen_to_canvas_divides_by_scale() {
        let vp = Viewport::new(Point::ZERO, 2.0);
        assert_eq!(vp.screen_to_canvas(Point::new(10.0, 20.0)), Point::new(5.0, 10.0));
    }

    // ============================================================================
    // reset() tests
    // ============================================================================

    #[test]
    fn reset_centers_above_middle_from_view_size() {
        let mut vp = Viewport::new(Point::new(999.0, 999.0), 3.0);
        assert!(vp.reset(Some((1200.0, 900.0))));
        assert_eq!(vp.offset, Point::new(600.0, 300.0));
        assert_eq!(vp.scale, 1.0);
    }

    #[test]
    fn reset_without_measured_view_is_deferred() {
        let mut vp = Viewport::new(Point::new(7.0, 8.0), 2.0);
        assert!(!vp.reset(None));
        assert!(!vp.reset(Some((0.0, 500.0))));
        // State untouched until the retry succeeds.
        assert_eq!(vp.offset, Point::new(7.0, 8.0));
        assert_eq!(vp.scale, 2.0);
    }

    // ============================================================================
    // ViewportMap tests
    // ============================================================================

    #[test]
    fn save_and_restore_roundtrip_exact_state() {
        let mut map = ViewportMap::default();
        let vp = Viewport::new(Point::new(-3.25, 81.5), 0.4);
        map.save("page-1", vp);
        assert_eq!(map.restore("page-1"), Some(vp));
    }

    #[test]
    fn restore_unknown_page_is_none() {
        let map = ViewportMap::default();
        assert_eq!(map.restore("page-404"), None);
    }

    #[test]
    fn clear_removes_saved_entry() {
        let mut map = ViewportMap::default();
        map.save("page-1", Viewport::default());
        map.clear("page-1");
        assert_eq!(map.restore("page-1"), None);
    }
}
