use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Whether `origin` is `allowed` exactly, or `allowed` plus a `:port` suffix.
fn origin_matches(origin: &str, allowed: &str) -> bool {
    if origin == allowed {
        return true;
    }
    origin
        .strip_prefix(allowed)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
}

/// Whether `origin` matches one of the configured origins, on any port.
///
/// `"*"` in the list allows every origin.
#[must_use]
pub fn origin_allowed(origin: &HeaderValue, cors_origins: &[String]) -> bool {
    if cors_origins.iter().any(|o| o == "*") {
        return true;
    }
    origin.to_str().is_ok_and(|origin_str| {
        cors_origins
            .iter()
            .any(|allowed| origin_matches(origin_str, allowed))
    })
}

/// Build a CORS layer for the item routes with the given allowed origins.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin_allowed(origin, &cors_origins)
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers(Any)
}
