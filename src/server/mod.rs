//! HTTP surface of the daemon: router, shared state, and route handlers.

pub mod error_mapping;
mod handlers;
pub mod responses;
mod router;
pub mod shutdown;
mod state;
pub mod structured_error;

pub use handlers::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    method_not_allowed_handler, not_found_handler, update_item_handler,
};
pub use responses::{ItemResponse, ItemsResponse, MessageResponse, DELETED_MESSAGE};
pub use router::build_router;
pub use shutdown::{forward_os_signals, wait_for_shutdown, ShutdownSignal};
pub use state::AppState;
