use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serialized shape of every error response from the proxy endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// An error response: HTTP status plus JSON body.
///
/// The taxonomy follows the proxy endpoints' behavior: validation errors are
/// 400 with the message surfaced verbatim, missing server configuration is a
/// generic 500, upstream API errors pass their status and payload through,
/// and anything unexpected collapses to a generic 500 at the handler
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReply {
    pub status: u16,
    pub body: ErrorBody,
}

impl ErrorReply {
    pub fn validation(message: &str) -> Self {
        Self {
            status: 400,
            body: ErrorBody {
                error: message.to_string(),
                details: None,
            },
        }
    }

    pub fn unauthorized(message: &str) -> Self {
        Self {
            status: 401,
            body: ErrorBody {
                error: message.to_string(),
                details: None,
            },
        }
    }

    pub fn server(message: &str) -> Self {
        Self {
            status: 500,
            body: ErrorBody {
                error: message.to_string(),
                details: None,
            },
        }
    }

    /// Upstream rejection: the upstream status code is passed through along
    /// with its error payload.
    pub fn upstream(message: &str, status: u16, details: Value) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.to_string(),
                details: Some(details),
            },
        }
    }
}

/// `POST /api/analyze` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

/// `POST /api/analyze` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub feedback: String,
}

/// `POST /api/figma` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigmaImportRequest {
    #[serde(rename = "figmaLink", default)]
    pub figma_link: String,
}

/// `POST /api/figma` success body: the resolved design data for a pasted
/// share link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigmaImportResponse {
    #[serde(rename = "fileKey")]
    pub file_key: String,
    #[serde(rename = "nodeId")]
    pub node_id: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileLastModified")]
    pub file_last_modified: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "nodeData")]
    pub node_data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_body_omits_absent_details() {
        let reply = ErrorReply::validation("Image URL is required");
        let json = serde_json::to_value(&reply.body).unwrap();
        assert_eq!(json, json!({ "error": "Image URL is required" }));
    }

    #[test]
    fn upstream_reply_carries_status_and_payload() {
        let reply = ErrorReply::upstream(
            "Error calling OpenAI API",
            429,
            json!({ "error": { "type": "rate_limit_exceeded" } }),
        );
        assert_eq!(reply.status, 429);
        assert_eq!(
            reply.body.details.unwrap()["error"]["type"],
            "rate_limit_exceeded"
        );
    }

    #[test]
    fn analyze_request_uses_camel_case_on_the_wire() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{ "imageUrl": "data:image/png;base64,x" }"#).unwrap();
        assert_eq!(req.image_url, "data:image/png;base64,x");
        // A body with no imageUrl field still parses; validation runs after.
        let empty: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.image_url, "");
    }

    #[test]
    fn figma_response_roundtrips_wire_names() {
        let resp = FigmaImportResponse {
            file_key: "ABC123".into(),
            node_id: Some("1:2".into()),
            file_name: "Design".into(),
            file_last_modified: "2026-08-30T00:00:00Z".into(),
            image_url: Some("https://figma-render/abc.png".into()),
            node_data: None,
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["fileKey"], "ABC123");
        assert_eq!(v["nodeId"], "1:2");
        assert_eq!(v["fileLastModified"], "2026-08-30T00:00:00Z");
    }
}
