use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::item::{ItemError, ItemPatch};
use crate::metrics::OperationTimer;
use crate::server::responses::ItemResponse;
use crate::server::state::AppState;

/// `PATCH /items/:name`
///
/// The body is optional: a blank body leaves the item unchanged, so a miss on
/// `name` still answers 404 rather than a body error.
pub async fn update_item_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ItemResponse>, ItemError> {
    let _timer = OperationTimer::new("update_item");
    let Path(name) = path?;
    let patch = ItemPatch::from_body(&body?)?;

    let item = state.items.update(&name, patch).await?;
    info!(from = %name, name = %item.name, price = %item.price, "Item updated");
    Ok(Json(ItemResponse { item }))
}
