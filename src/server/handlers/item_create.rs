use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use http::StatusCode;
use tracing::info;

use crate::item::{ItemError, NewItem};
use crate::metrics::OperationTimer;
use crate::server::responses::ItemResponse;
use crate::server::state::AppState;

/// `POST /items`
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ItemError> {
    let _timer = OperationTimer::new("create_item");
    let Json(new_item) = payload.map_err(ItemError::from)?;

    let item = state.items.create(new_item).await;
    info!(name = %item.name, price = %item.price, "Item created");
    Ok((StatusCode::CREATED, Json(ItemResponse { item })))
}
