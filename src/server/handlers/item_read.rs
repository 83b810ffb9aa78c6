use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::item::ItemError;
use crate::metrics::OperationTimer;
use crate::server::responses::ItemResponse;
use crate::server::state::AppState;

/// `GET /items/:name`
pub async fn get_item_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ItemResponse>, ItemError> {
    let _timer = OperationTimer::new("get_item");
    let Path(name) = path?;
    let item = state.items.get(&name).await?;
    Ok(Json(ItemResponse { item }))
}
