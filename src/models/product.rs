use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Currency assumed when an observation does not name one.
pub const DEFAULT_CURRENCY: &str = "ILS";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Canonical grouping key for an item name (lowercase, trimmed).
///
/// Returns `None` for blank names, which have nothing to group under.
pub fn normalize_item_name(name: &str) -> Option<String> {
    let key = name.trim().to_lowercase();
    if key.is_empty() { None } else { Some(key) }
}

/// A single price observation for a product at one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedProduct {
    /// Store-local identifier.
    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub store_id: String,

    pub name: String,

    /// List price.
    pub price: f64,

    /// Promotional price; only honored when it does not exceed `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl PricedProduct {
    pub fn new(sku: &str, store_id: &str, name: &str, price: f64) -> Self {
        Self {
            sku: sku.to_string(),
            store_id: store_id.to_string(),
            name: name.to_string(),
            price,
            sale_price: None,
            currency: default_currency(),
        }
    }

    /// Builder-style setter for the sale price.
    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    /// Price actually paid: the sale price when present and not above list price.
    #[inline]
    pub fn effective_price(&self) -> f64 {
        match self.sale_price {
            Some(sale) if sale <= self.price => sale,
            _ => self.price,
        }
    }

    /// Canonical key for grouping observations of the same item.
    pub fn key(&self) -> Option<String> {
        normalize_item_name(&self.name)
    }

    /// Whether the observation carries a usable store id.
    pub fn has_store(&self) -> bool {
        !self.store_id.trim().is_empty()
    }
}

/// An online store with its flat delivery fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,

    pub name: String,

    /// Charged once per store regardless of item count.
    #[serde(default)]
    pub delivery_fee: f64,
}

impl Store {
    pub fn new(id: &str, name: &str, delivery_fee: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            delivery_fee,
        }
    }

    /// Stand-in for a store missing from the registry: named by its id, no fee.
    pub fn synthetic(id: &str) -> Self {
        Self::new(id, id, 0.0)
    }
}

/// Stores keyed by id.
pub type StoreRegistry = HashMap<String, Store>;

/// Build a registry from a list of stores. Last record wins on duplicate ids.
pub fn store_registry(stores: impl IntoIterator<Item = Store>) -> StoreRegistry {
    stores.into_iter().map(|s| (s.id.clone(), s)).collect()
}
