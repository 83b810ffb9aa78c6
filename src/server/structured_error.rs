use std::fmt::Display;

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;

use crate::logging::get_log_file_path;
use crate::server::error_mapping::ToStructuredError;

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub logs: String,
}

/// JSON error body: `{"error": {"message", "status", "code", "tip"?, "logs"?}}`.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: ErrorDetail,
}

impl StructuredError {
    pub fn new(status: StatusCode, code: &str, message: String) -> Self {
        Self {
            status,
            error: ErrorDetail {
                message,
                status: status.as_u16(),
                code: code.to_string(),
                tip: None,
                logs: get_log_file_path().to_string(),
            },
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: &str) -> Self {
        self.error.tip = Some(tip.to_string());
        self
    }
}

impl IntoResponse for StructuredError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Convert a domain error into a structured error body.
pub fn to_structured_error<E: ToStructuredError + Display>(
    status: StatusCode,
    err: &E,
) -> StructuredError {
    let (code, tip) = err.error_code_and_tip();
    let se = StructuredError::new(status, code, err.to_string());
    match tip {
        Some(tip) => se.with_tip(tip),
        None => se,
    }
}

#[cfg(test)]
#[path = "structured_error_tests.rs"]
mod structured_error_tests;
