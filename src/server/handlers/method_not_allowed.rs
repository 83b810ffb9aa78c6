use axum::response::{IntoResponse, Response};
use http::{Method, StatusCode, Uri};

use crate::server::structured_error::StructuredError;

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> Response {
    StructuredError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "METHOD_NOT_ALLOWED",
        format!("Method Not Allowed: {method} {}", uri.path()),
    )
    .with_tip("Items support GET, POST on /items and GET, PATCH, DELETE on /items/:name")
    .into_response()
}
