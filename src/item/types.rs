use serde::{Deserialize, Serialize};

use super::error::ItemError;

/// A name/price record. `name` is the case-sensitive lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Apply a partial update in place. Absent fields keep their value.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Body of `POST /items`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

impl From<NewItem> for Item {
    fn from(new_item: NewItem) -> Self {
        Self {
            name: new_item.name,
            price: new_item.price,
        }
    }
}

/// Body of `PATCH /items/:name`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ItemPatch {
    /// Parse a raw request body. A blank body is an empty patch.
    pub fn from_body(body: &[u8]) -> Result<Self, ItemError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ItemError::invalid_body(e.to_string()))
    }
}
