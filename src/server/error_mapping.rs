use axum::extract::rejection::{BytesRejection, JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tracing::debug;

use crate::item::ItemError;
use crate::server::structured_error::to_structured_error;

/// Trait for mapping domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);
}

impl ToStructuredError for ItemError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            ItemError::NotFound(_) => ("ITEM_NOT_FOUND", Some("List existing items with GET /items")),
            ItemError::InvalidBody(_) => (
                "INVALID_BODY",
                Some("Send a JSON object such as {\"name\": \"Apple\", \"price\": 1.29}"),
            ),
            ItemError::InvalidPath(_) => (
                "INVALID_PATH",
                Some("Item names in the path must be valid percent-encoded UTF-8"),
            ),
            ItemError::PayloadTooLarge(_) => (
                "PAYLOAD_TOO_LARGE",
                Some("Raise [server] max_body_bytes in the daemon config"),
            ),
            ItemError::UnsupportedMediaType(_) => (
                "UNSUPPORTED_MEDIA_TYPE",
                Some("Set the header Content-Type: application/json"),
            ),
        }
    }
}

impl ItemError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ItemError::NotFound(_) => StatusCode::NOT_FOUND,
            ItemError::InvalidBody(_) | ItemError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ItemError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ItemError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    /// Classify an extractor rejection by the status axum assigned to it.
    fn from_rejection_status(status: StatusCode, text: String) -> Self {
        match status {
            StatusCode::PAYLOAD_TOO_LARGE => ItemError::PayloadTooLarge(text),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => ItemError::UnsupportedMediaType(text),
            _ => ItemError::InvalidBody(text),
        }
    }
}

impl From<JsonRejection> for ItemError {
    fn from(rejection: JsonRejection) -> Self {
        ItemError::from_rejection_status(rejection.status(), rejection.body_text())
    }
}

impl From<BytesRejection> for ItemError {
    fn from(rejection: BytesRejection) -> Self {
        ItemError::from_rejection_status(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ItemError {
    fn from(rejection: PathRejection) -> Self {
        ItemError::invalid_path(rejection.body_text())
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        debug!(status = %status.as_u16(), error = %self, "Request rejected");
        to_structured_error(status, &self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ItemError::not_found("0");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code_and_tip().0, "ITEM_NOT_FOUND");
    }

    #[test]
    fn test_invalid_body_maps_to_400() {
        let err = ItemError::invalid_body("missing field `price`");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code_and_tip().0, "INVALID_BODY");
    }

    #[test]
    fn test_invalid_path_maps_to_400() {
        let err = ItemError::invalid_path("invalid utf-8");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code_and_tip().0, "INVALID_PATH");
    }

    #[test]
    fn test_rejection_status_is_kept() {
        let too_large = ItemError::from_rejection_status(StatusCode::PAYLOAD_TOO_LARGE, "big".into());
        assert_eq!(too_large.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(too_large.error_code_and_tip().0, "PAYLOAD_TOO_LARGE");

        let media = ItemError::from_rejection_status(StatusCode::UNSUPPORTED_MEDIA_TYPE, "text".into());
        assert_eq!(media.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(media.error_code_and_tip().0, "UNSUPPORTED_MEDIA_TYPE");

        let syntax = ItemError::from_rejection_status(StatusCode::UNPROCESSABLE_ENTITY, "x".into());
        assert_eq!(syntax, ItemError::invalid_body("x"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ItemError::not_found("Banana").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
