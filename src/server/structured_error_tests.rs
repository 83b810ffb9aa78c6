use super::*;
use crate::item::ItemError;

#[test]
fn test_structured_error_json_format() {
    let se = StructuredError::new(
        StatusCode::NOT_FOUND,
        "ITEM_NOT_FOUND",
        "Item not found: Banana".to_string(),
    );
    let parsed = serde_json::to_value(&se).unwrap();
    assert_eq!(parsed["error"]["status"], 404);
    assert_eq!(parsed["error"]["code"], "ITEM_NOT_FOUND");
    assert_eq!(parsed["error"]["message"], "Item not found: Banana");
    assert!(parsed["error"].get("tip").is_none());
    // The HTTP status lives in the body only once
    assert!(parsed.get("status").is_none());
}

#[test]
fn test_structured_error_with_tip() {
    let se = StructuredError::new(StatusCode::BAD_REQUEST, "INVALID_BODY", "bad".to_string())
        .with_tip("Send a JSON object");
    let parsed = serde_json::to_value(&se).unwrap();
    assert_eq!(parsed["error"]["tip"], "Send a JSON object");
}

#[test]
fn test_structured_error_logs_skipped_when_empty() {
    let se = StructuredError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Not Found".to_string());
    let parsed = serde_json::to_value(&se).unwrap();
    assert_eq!(parsed["error"].get("logs").is_none(), se.error.logs.is_empty());
}

#[test]
fn test_structured_error_into_response_uses_status() {
    let se = StructuredError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "METHOD_NOT_ALLOWED",
        "Method Not Allowed".to_string(),
    );
    let response = se.into_response();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn test_to_structured_error_from_item_error() {
    let err = ItemError::invalid_body("expected value at line 1 column 1");
    let se = to_structured_error(StatusCode::BAD_REQUEST, &err);
    assert_eq!(se.error.code, "INVALID_BODY");
    assert_eq!(se.error.status, 400);
    assert!(se.error.message.starts_with("Invalid request body"));
    assert!(se.error.tip.is_some());
}
