//! UI-layer constants: proxy endpoint paths and interaction tuning.

/// Proxy endpoint for design feedback requests.
pub const ANALYZE_ENDPOINT: &str = "/api/analyze";

/// Proxy endpoint for Figma share-link imports.
pub const FIGMA_ENDPOINT: &str = "/api/figma";

/// Wheel zoom: scale changes by `-deltaY * WHEEL_ZOOM_SENSITIVITY`.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.01;

/// Toolbar zoom buttons step the scale by this amount.
pub const ZOOM_STEP: f64 = 0.1;

/// Background grid cell size at scale 1, in CSS pixels.
pub const GRID_SIZE_PX: f64 = 20.0;

/// Name given to pages created from the sidebar.
pub const NEW_PAGE_NAME: &str = "New Page";
