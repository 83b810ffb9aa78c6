use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::item::ItemError;
use crate::metrics::OperationTimer;
use crate::server::responses::MessageResponse;
use crate::server::state::AppState;

/// `DELETE /items/:name`
pub async fn delete_item_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ItemError> {
    let _timer = OperationTimer::new("delete_item");
    let Path(name) = path?;
    state.items.delete(&name).await?;
    info!(name = %name, "Item deleted");
    Ok(Json(MessageResponse::deleted()))
}
