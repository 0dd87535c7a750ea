pub mod canvas_area;
pub mod confirm_dialog;
pub mod design_card;
pub mod feedback_panel;
pub mod figma_import_dialog;
pub mod sidebar;
pub mod toast;
pub mod toolbar;

pub use canvas_area::CanvasArea;
pub use confirm_dialog::ConfirmDialog;
pub use design_card::DesignCard;
pub use feedback_panel::FeedbackPanel;
pub use figma_import_dialog::FigmaImportDialog;
pub use sidebar::Sidebar;
pub use toast::Toast;
pub use toolbar::Toolbar;
