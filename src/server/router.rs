use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::cors::build_cors_layer;
use crate::http_logging::HttpLoggingLayer;
use crate::server::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    method_not_allowed_handler, not_found_handler, update_item_handler,
};
use crate::server::state::AppState;

/// Build the HTTP router for the item routes.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/items` | list |
/// | POST | `/items` | create |
/// | GET | `/items/:name` | read |
/// | PATCH | `/items/:name` | update |
/// | DELETE | `/items/:name` | delete |
///
/// Other methods on these paths answer a JSON 405; other paths a JSON 404.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(state.server.cors_origins.clone());
    let max_body_bytes = state.server.max_body_bytes;

    Router::new()
        .route(
            "/items",
            get(list_items_handler)
                .post(create_item_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/items/:name",
            get(get_item_handler)
                .patch(update_item_handler)
                .delete(delete_item_handler)
                .fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(HttpLoggingLayer)
        .with_state(state)
}
