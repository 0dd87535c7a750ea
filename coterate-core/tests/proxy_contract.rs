//! The `/api/analyze` and `/api/figma` endpoint contracts, walked through
//! end to end against the pure contract functions.

use coterate_core::api::AnalyzeRequest;
use coterate_core::{analyze, figma};
use serde_json::json;

#[test]
fn analyze_without_image_url_is_400() {
    let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
    let err = analyze::validate_request(&req).unwrap_err();
    assert_eq!(err.status, 400);
    assert_eq!(
        serde_json::to_value(&err.body).unwrap(),
        json!({ "error": "Image URL is required" })
    );
}

#[test]
fn analyze_without_server_credential_is_500() {
    let req = AnalyzeRequest {
        image_url: "https://example.com/design.png".into(),
    };
    analyze::validate_request(&req).unwrap();
    let err = analyze::require_api_key(None).unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(
        err.body.error,
        "OpenAI API key is missing in server configuration"
    );
}

#[test]
fn analyze_happy_path_builds_request_and_extracts_feedback() {
    let req = AnalyzeRequest {
        image_url: "data:image/png;base64,AAAA".into(),
    };
    let image_url = analyze::validate_request(&req).unwrap();
    let key = analyze::require_api_key(Some("sk-test")).unwrap();
    assert_eq!(key, "sk-test");

    let body = analyze::chat_completion_body(image_url);
    assert_eq!(
        body["messages"][1]["content"][1]["image_url"]["url"],
        "data:image/png;base64,AAAA"
    );

    let completion = json!({
        "choices": [{ "message": { "content": "Increase contrast on labels." } }]
    });
    assert_eq!(
        analyze::feedback_from_completion(&completion).as_deref(),
        Some("Increase contrast on labels.")
    );
}

#[test]
fn analyze_upstream_rejection_passes_status_through() {
    let details = json!({ "error": { "message": "model overloaded" } });
    let err = analyze::upstream_error(503, details.clone());
    assert_eq!(err.status, 503);
    assert_eq!(err.body.details, Some(details));
}

#[test]
fn figma_import_resolves_link_and_assembles_design_data() {
    let token = figma::require_access_token(Some("figd_token")).unwrap();
    assert_eq!(token, "figd_token");

    let link = figma::validate_link(
        "https://www.figma.com/file/ABC123/Checkout?node-id=7%3A99",
    )
    .unwrap();
    assert_eq!(link.file_key, "ABC123");
    assert_eq!(link.node_id.as_deref(), Some("7:99"));

    assert_eq!(
        figma::file_url(&link.file_key),
        "https://api.figma.com/v1/files/ABC123"
    );

    let file = json!({ "name": "Checkout", "lastModified": "2026-08-28T09:30:00Z" });
    let nodes = json!({ "nodes": { "7:99": { "document": { "type": "FRAME" } } } });
    let images = json!({ "images": { "7:99": "https://render/frame.png" } });
    let data = figma::design_data(&link, &file, Some(&nodes), Some(&images));

    let wire = serde_json::to_value(&data).unwrap();
    assert_eq!(wire["fileKey"], "ABC123");
    assert_eq!(wire["nodeId"], "7:99");
    assert_eq!(wire["fileName"], "Checkout");
    assert_eq!(wire["imageUrl"], "https://render/frame.png");
    assert_eq!(wire["nodeData"]["document"]["type"], "FRAME");
}

#[test]
fn figma_import_without_session_is_401_before_any_parsing() {
    let err = figma::require_access_token(None).unwrap_err();
    assert_eq!(err.status, 401);
    assert_eq!(err.body.error, "Authentication required");
}

#[test]
fn figma_bad_link_is_400_with_format_error() {
    let err = figma::validate_link("https://www.figma.com/design/ABC/Name").unwrap_err();
    assert_eq!(err.status, 400);
    assert_eq!(err.body.error, "Invalid Figma link format");
}
