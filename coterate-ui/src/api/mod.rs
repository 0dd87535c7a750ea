mod http;

pub mod analyze;
pub mod figma;

pub use http::ApiFailure;
