//! Common test utilities

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Method, Request, StatusCode};
use items_daemon::{build_router, AppState, Item, ItemCollection};
use serde_json::Value;
use tower::ServiceExt;

/// The item every test starts with.
pub fn banana() -> Item {
    Item::new("Banana", 1.99)
}

/// A router over a fresh collection seeded with Banana, plus a handle to the
/// collection so tests can inspect or reset it.
pub fn seeded_app() -> (Router, Arc<ItemCollection>) {
    let items = Arc::new(ItemCollection::with_items(vec![banana()]));
    let app = build_router(AppState::new(Arc::clone(&items)));
    (app, items)
}

/// Send one request through the router and decode the JSON body.
///
/// An empty body decodes to `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };
    (status, json)
}
