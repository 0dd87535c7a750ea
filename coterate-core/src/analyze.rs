//! Contract of the `/api/analyze` proxy endpoint: request validation, the
//! upstream chat-completion payload, and how feedback text is extracted from
//! the upstream response. The HTTP server hosting the endpoint is an external
//! collaborator; the wasm client and these functions share one source of
//! truth for the wire behavior.

use crate::api::{AnalyzeRequest, ErrorReply};
use serde_json::{json, Value};

/// System prompt sent to the vision model for every analysis.
pub const DESIGN_ANALYSIS_PROMPT: &str = "\
You are a UI/UX design expert tasked with analyzing design screenshots. Provide constructive feedback on the following aspects:

- Visual Hierarchy: Assess how well the design guides the user's attention
- Color Usage: Evaluate the color scheme, contrast, and accessibility
- Typography: Review font choices, readability, and hierarchy
- Layout & Spacing: Analyze the composition, alignment, and use of whitespace
- Usability & Accessibility: Identify potential usability issues or accessibility concerns
- Mobile Responsiveness: If applicable, assess how the design might work on smaller screens

Format your response as clear, actionable feedback points. Include both positive aspects and thoughtful suggestions for improvement.";

pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const MODEL: &str = "gpt-4o";
const MAX_TOKENS: u32 = 1000;

/// Reject a request without an image reference.
pub fn validate_request(req: &AnalyzeRequest) -> Result<&str, ErrorReply> {
    if req.image_url.is_empty() {
        return Err(ErrorReply::validation("Image URL is required"));
    }
    Ok(&req.image_url)
}

/// The server credential comes from the environment; its absence is a server
/// configuration error, never surfaced with the key name of the caller's
/// input.
pub fn require_api_key(key: Option<&str>) -> Result<&str, ErrorReply> {
    match key {
        Some(k) if !k.is_empty() => Ok(k),
        _ => Err(ErrorReply::server(
            "OpenAI API key is missing in server configuration",
        )),
    }
}

/// Build the chat-completion request body for one design image.
pub fn chat_completion_body(image_url: &str) -> Value {
    json!({
        "model": MODEL,
        "messages": [
            {
                "role": "system",
                "content": DESIGN_ANALYSIS_PROMPT,
            },
            {
                "role": "user",
                "content": [
                    {
                        "type": "text",
                        "text": "Please analyze this design and provide constructive feedback.",
                    },
                    {
                        "type": "image_url",
                        "image_url": { "url": image_url },
                    },
                ],
            },
        ],
        "max_tokens": MAX_TOKENS,
    })
}

/// Pull the feedback text out of a chat-completion response
/// (`choices[0].message.content`).
pub fn feedback_from_completion(completion: &Value) -> Option<String> {
    completion["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
}

/// An upstream rejection passes its status and payload through.
pub fn upstream_error(status: u16, details: Value) -> ErrorReply {
    ErrorReply::upstream("Error calling OpenAI API", status, details)
}

/// Anything unexpected at the handler boundary becomes a generic 500.
pub fn unexpected_error() -> ErrorReply {
    ErrorReply::server("Failed to analyze design")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_image_url_is_rejected_with_400() {
        let err = validate_request(&AnalyzeRequest {
            image_url: String::new(),
        })
        .unwrap_err();
        assert_eq!(err.status, 400);
        assert_eq!(err.body.error, "Image URL is required");
        assert_eq!(err.body.details, None);
    }

    #[test]
    fn valid_image_url_passes_validation() {
        let req = AnalyzeRequest {
            image_url: "data:image/png;base64,iVBOR".into(),
        };
        assert_eq!(validate_request(&req).unwrap(), "data:image/png;base64,iVBOR");
    }

    #[test]
    fn missing_api_key_is_a_500_configuration_error() {
        for key in [None, Some("")] {
            let err = require_api_key(key).unwrap_err();
            assert_eq!(err.status, 500);
            assert_eq!(
                err.body.error,
                "OpenAI API key is missing in server configuration"
            );
        }
        assert_eq!(require_api_key(Some("sk-test")).unwrap(), "sk-test");
    }

    #[test]
    fn completion_body_carries_prompt_image_and_limits() {
        let body = chat_completion_body("https://example.com/shot.png");
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], DESIGN_ANALYSIS_PROMPT);
        assert_eq!(
            body["messages"][1]["content"][1]["image_url"]["url"],
            "https://example.com/shot.png"
        );
    }

    #[test]
    fn feedback_is_read_from_first_choice() {
        let completion = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Strong grid." } }
            ]
        });
        assert_eq!(
            feedback_from_completion(&completion).as_deref(),
            Some("Strong grid.")
        );
    }

    #[test]
    fn malformed_completion_yields_none() {
        assert_eq!(feedback_from_completion(&json!({})), None);
        assert_eq!(feedback_from_completion(&json!({ "choices": [] })), None);
    }

    #[test]
    fn upstream_errors_pass_status_through() {
        let err = upstream_error(401, json!({ "error": { "code": "invalid_api_key" } }));
        assert_eq!(err.status, 401);
        assert_eq!(err.body.error, "Error calling OpenAI API");
        assert!(err.body.details.is_some());
    }
}
