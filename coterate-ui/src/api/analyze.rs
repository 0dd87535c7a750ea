//! Client for `POST /api/analyze`: one image reference in, free-text design
//! feedback out. The caller keeps a loading state until this settles and
//! must leave card state intact on failure.

use super::http::{post_json, ApiFailure};
use crate::config::ANALYZE_ENDPOINT;
use coterate_core::api::{AnalyzeRequest, AnalyzeResponse};

pub async fn request_feedback(image_url: &str) -> Result<String, ApiFailure> {
    let request = AnalyzeRequest {
        image_url: image_url.to_string(),
    };
    let (status, body) = post_json(ANALYZE_ENDPOINT, &request).await?;

    if !(200..300).contains(&status) {
        return Err(ApiFailure::from_error_body(status, &body));
    }

    let response: AnalyzeResponse =
        serde_json::from_str(&body).map_err(|_| ApiFailure::decode(status))?;
    Ok(response.feedback)
}
