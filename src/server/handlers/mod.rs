mod item_create;
mod item_delete;
mod item_list;
mod item_read;
mod item_update;
mod method_not_allowed;
mod not_found;

pub use item_create::create_item_handler;
pub use item_delete::delete_item_handler;
pub use item_list::list_items_handler;
pub use item_read::get_item_handler;
pub use item_update::update_item_handler;
pub use method_not_allowed::method_not_allowed_handler;
pub use not_found::not_found_handler;
