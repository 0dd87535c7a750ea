//! Client for `POST /api/figma`: a pasted share link in, resolved design
//! data (file metadata plus a rendered frame image URL) out. The bearer
//! credential lives server-side in the OAuth session; a 401 here means the
//! user is not signed in, not that a retry would help.

use super::http::{post_json, ApiFailure};
use crate::config::FIGMA_ENDPOINT;
use coterate_core::api::{FigmaImportRequest, FigmaImportResponse};

pub async fn import_design(figma_link: &str) -> Result<FigmaImportResponse, ApiFailure> {
    let request = FigmaImportRequest {
        figma_link: figma_link.to_string(),
    };
    let (status, body) = post_json(FIGMA_ENDPOINT, &request).await?;

    if !(200..300).contains(&status) {
        return Err(ApiFailure::from_error_body(status, &body));
    }

    serde_json::from_str(&body).map_err(|_| ApiFailure::decode(status))
}
