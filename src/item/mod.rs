//! Item domain: the name/price record and the in-memory collection that owns it.

mod collection;
mod error;
mod types;

pub use collection::ItemCollection;
pub use error::ItemError;
pub use types::{Item, ItemPatch, NewItem};
