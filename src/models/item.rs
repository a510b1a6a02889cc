use serde::{Deserialize, Serialize};

use crate::models::product::normalize_item_name;

fn default_quantity() -> f64 {
    1.0
}

/// A parsed shopping list entry.
///
/// Produced by the list parser; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,

    /// Display and search text.
    pub name: String,

    /// Count or weight.
    #[serde(default = "default_quantity")]
    pub quantity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl GroceryItem {
    pub fn new(id: &str, name: &str, quantity: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            quantity,
            unit: None,
            brand: None,
        }
    }

    /// Non-blank name and a positive, finite quantity.
    pub fn is_valid(&self) -> bool {
        self.key().is_some() && self.quantity.is_finite() && self.quantity > 0.0
    }

    /// Same key products are grouped under.
    pub fn key(&self) -> Option<String> {
        normalize_item_name(&self.name)
    }
}
