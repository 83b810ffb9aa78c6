//! The in-memory item store.
//!
//! Items are kept in insertion order. Lookups scan linearly and return the
//! first item whose name matches exactly; names are not required to be
//! unique, so a duplicate created later is shadowed by the earlier one.

use tokio::sync::Mutex;
use tracing::debug;

use super::error::ItemError;
use super::types::{Item, ItemPatch, NewItem};

/// Ordered collection of items. Every operation runs under one lock.
#[derive(Debug, Default)]
pub struct ItemCollection {
    items: Mutex<Vec<Item>>,
}

impl ItemCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection pre-populated with `items`, in order.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Snapshot of every item, in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    pub async fn get(&self, name: &str) -> Result<Item, ItemError> {
        self.items
            .lock()
            .await
            .iter()
            .find(|item| item.name == name)
            .cloned()
            .ok_or_else(|| ItemError::not_found(name))
    }

    /// Append a new item. No uniqueness check is made on `name`.
    pub async fn create(&self, new_item: NewItem) -> Item {
        let item = Item::from(new_item);
        self.items.lock().await.push(item.clone());
        debug!(name = %item.name, "Item appended");
        item
    }

    /// Apply `patch` to the first item named `name` and return its new value.
    pub async fn update(&self, name: &str, patch: ItemPatch) -> Result<Item, ItemError> {
        let mut items = self.items.lock().await;
        let item = items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| ItemError::not_found(name))?;
        item.apply(patch);
        Ok(item.clone())
    }

    /// Remove the first item named `name` and return it.
    pub async fn delete(&self, name: &str) -> Result<Item, ItemError> {
        let mut items = self.items.lock().await;
        let index = items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| ItemError::not_found(name))?;
        Ok(items.remove(index))
    }

    /// Empty the collection in place.
    pub async fn clear(&self) {
        self.items.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod collection_tests;
