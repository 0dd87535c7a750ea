//! Contract of the `/api/figma` proxy endpoint: share-link parsing, the
//! upstream REST URLs, and assembly of the design data returned to the
//! client. Requires a bearer credential from an OAuth session obtained
//! out-of-band; its absence is an authentication error, not retryable.

use crate::api::{ErrorReply, FigmaImportResponse};
use serde_json::Value;
use thiserror::Error;

pub const FIGMA_API_BASE: &str = "https://api.figma.com/v1";

/// File key and optional node id resolved from a pasted share URL.
#[derive(Debug, Clone, PartialEq)]
pub struct FigmaLink {
    pub file_key: String,
    pub node_id: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum FigmaLinkError {
    #[error("not a valid URL")]
    InvalidUrl,
    #[error("not a valid Figma file link")]
    NotAFileLink,
    #[error("Figma link is missing a file key")]
    MissingFileKey,
}

/// Parse a Figma share link into its file key and node id.
///
/// Accepted shapes:
/// `https://www.figma.com/file/{key}/{name}?node-id=123%3A456`
/// `https://www.figma.com/file/{key}/{name}`
///
/// The node id arrives percent-encoded (`1%3A2`) and is decoded to `1:2`.
/// Any path not starting with `/file/{key}` is a format error.
pub fn parse_figma_link(link: &str) -> Result<FigmaLink, FigmaLinkError> {
    let rest = link
        .split_once("://")
        .map(|(_, rest)| rest)
        .ok_or(FigmaLinkError::InvalidUrl)?;
    let (_host, path_and_query) = match rest.split_once('/') {
        Some((host, tail)) => (host, tail),
        None => return Err(FigmaLinkError::NotAFileLink),
    };

    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_and_query, None),
    };
    // Ignore any fragment on the last component.
    let path = path.split('#').next().unwrap_or(path);

    let mut segments = path.split('/');
    if segments.next() != Some("file") {
        return Err(FigmaLinkError::NotAFileLink);
    }
    let file_key = match segments.next() {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => return Err(FigmaLinkError::MissingFileKey),
    };

    let node_id = query.and_then(|q| {
        q.split('&').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == "node-id").then(|| percent_decode(value))
        })
    });

    Ok(FigmaLink { file_key, node_id })
}

/// Minimal percent-decoder for query parameter values (`%3A` → `:`).
/// Malformed escapes are kept as-is rather than rejected.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes.get(i + 1..i + 3).and_then(|h| {
                    std::str::from_utf8(h)
                        .ok()
                        .and_then(|h| u8::from_str_radix(h, 16).ok())
                });
                match hex {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// The endpoint requires an authenticated session carrying a Figma access
/// token.
pub fn require_access_token(token: Option<&str>) -> Result<&str, ErrorReply> {
    match token {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(ErrorReply::unauthorized("Authentication required")),
    }
}

/// Reject a request without a link before parsing.
pub fn validate_link(figma_link: &str) -> Result<FigmaLink, ErrorReply> {
    if figma_link.is_empty() {
        return Err(ErrorReply::validation("Figma link is required"));
    }
    parse_figma_link(figma_link)
        .map_err(|_| ErrorReply::validation("Invalid Figma link format"))
}

pub fn file_url(file_key: &str) -> String {
    format!("{FIGMA_API_BASE}/files/{file_key}")
}

pub fn nodes_url(file_key: &str, node_id: &str) -> String {
    format!("{FIGMA_API_BASE}/files/{file_key}/nodes?ids={node_id}")
}

/// Rendered raster export for a node: PNG at 2x for crisp display on
/// zoomed canvases.
pub fn images_url(file_key: &str, node_id: &str) -> String {
    format!("{FIGMA_API_BASE}/images/{file_key}?ids={node_id}&format=png&scale=2")
}

/// Which upstream call failed, for the passthrough error message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpstreamStep {
    File,
    Nodes,
    Images,
}

pub fn upstream_error(step: UpstreamStep, status: u16, details: Value) -> ErrorReply {
    let message = match step {
        UpstreamStep::File => "Failed to access Figma file",
        UpstreamStep::Nodes => "Failed to access node data",
        UpstreamStep::Images => "Failed to get image data",
    };
    ErrorReply::upstream(message, status, details)
}

pub fn unexpected_error() -> ErrorReply {
    ErrorReply::server("Failed to process Figma data")
}

/// Assemble the response from the upstream payloads. `nodes` and `images`
/// are only fetched (and only consulted) when the link carried a node id.
pub fn design_data(
    link: &FigmaLink,
    file: &Value,
    nodes: Option<&Value>,
    images: Option<&Value>,
) -> FigmaImportResponse {
    let node_id = link.node_id.as_deref();
    FigmaImportResponse {
        file_key: link.file_key.clone(),
        node_id: link.node_id.clone(),
        file_name: file["name"].as_str().unwrap_or_default().to_string(),
        file_last_modified: file["lastModified"].as_str().unwrap_or_default().to_string(),
        image_url: node_id
            .zip(images)
            .and_then(|(id, images)| images["images"][id].as_str())
            .map(str::to_string),
        node_data: node_id
            .zip(nodes)
            .map(|(id, nodes)| nodes["nodes"][id].clone())
            .filter(|v| !v.is_null()),
    }
}
