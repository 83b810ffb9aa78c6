use axum::response::{IntoResponse, Response};
use http::{StatusCode, Uri};

use crate::server::structured_error::StructuredError;

/// Fallback for paths no route matches.
pub async fn not_found_handler(uri: Uri) -> Response {
    StructuredError::new(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("Not Found: {}", uri.path()),
    )
    .into_response()
}
