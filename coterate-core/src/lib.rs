pub mod analyze;
pub mod api;
pub mod cards;
pub mod figma;
pub mod pages;
pub mod points;
pub mod session;
pub mod viewport;

pub use api::{
    AnalyzeRequest, AnalyzeResponse, ErrorBody, ErrorReply, FigmaImportRequest,
    FigmaImportResponse,
};
pub use cards::{AnalysisError, CardRegistry, DesignIteration};
pub use figma::{parse_figma_link, FigmaLink, FigmaLinkError};
pub use pages::{Page, PageStore};
pub use points::Point;
pub use session::{Mode, PointerTarget, Session};
pub use viewport::{Viewport, ViewportMap, MAX_SCALE, MIN_SCALE};
