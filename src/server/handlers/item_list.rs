use axum::extract::State;
use axum::Json;

use crate::metrics::OperationTimer;
use crate::server::responses::ItemsResponse;
use crate::server::state::AppState;

/// `GET /items`
pub async fn list_items_handler(State(state): State<AppState>) -> Json<ItemsResponse> {
    let _timer = OperationTimer::new("list_items");
    let items = state.items.list().await;
    Json(ItemsResponse { items })
}
