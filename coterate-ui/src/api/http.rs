//! Thin fetch wrapper for the proxy endpoints. Single-shot: no retry, no
//! cancellation, no timeout.

use coterate_core::api::ErrorBody;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// A settled failure from an endpoint call: the HTTP status (0 when the
/// request never reached the server) and a displayable message.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub message: String,
}

impl ApiFailure {
    fn network(context: &str) -> Self {
        Self {
            status: 0,
            message: format!("Network error: {context}"),
        }
    }

    /// Decode an error response body into a failure. The endpoints reply
    /// with `{ "error": ... }`; anything else falls back to the status.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("Request failed with status {status}"));
        Self { status, message }
    }

    pub fn decode(status: u16) -> Self {
        Self {
            status,
            message: "Unexpected response from server".to_string(),
        }
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

fn js_failure(context: &str, err: JsValue) -> ApiFailure {
    log::warn!("{context}: {err:?}");
    ApiFailure::network(context)
}

/// POST a JSON body and return `(status, response text)`. Non-2xx statuses
/// are returned, not errors; the caller decides how to decode them.
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(u16, String), ApiFailure> {
    let payload = serde_json::to_string(body)
        .map_err(|e| js_failure("serialize request", JsValue::from_str(&e.to_string())))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| js_failure("build request", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_failure("set headers", e))?;

    let window = web_sys::window()
        .ok_or_else(|| js_failure("no window", JsValue::NULL))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_failure("fetch", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| js_failure("fetch returned a non-Response", e))?;

    let status = response.status();
    let text = JsFuture::from(response.text().map_err(|e| js_failure("read body", e))?)
        .await
        .map_err(|e| js_failure("read body", e))?;

    Ok((status, text.as_string().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_surfaced_verbatim() {
        let failure =
            ApiFailure::from_error_body(400, r#"{ "error": "Image URL is required" }"#);
        assert_eq!(failure.status, 400);
        assert_eq!(failure.message, "Image URL is required");
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let failure = ApiFailure::from_error_body(502, "<html>Bad Gateway</html>");
        assert_eq!(failure.message, "Request failed with status 502");
    }

    #[test]
    fn error_details_do_not_break_decoding() {
        let failure = ApiFailure::from_error_body(
            429,
            r#"{ "error": "Error calling OpenAI API", "details": { "type": "rate_limit" } }"#,
        );
        assert_eq!(failure.message, "Error calling OpenAI API");
    }
}
