use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::models::PricedProduct;

/// Cheapest observation per normalized item name.
///
/// Keeps groups in order of first appearance so downstream plans are
/// reproducible for a given input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheapestSelection {
    entries: Vec<(String, PricedProduct)>,
}

impl CheapestSelection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected product for a normalized key.
    pub fn get(&self, key: &str) -> Option<&PricedProduct> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PricedProduct)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Selected products in group order.
    pub fn products(&self) -> Vec<PricedProduct> {
        self.entries.iter().map(|(_, p)| p.clone()).collect()
    }
}

/// Pick the cheapest observation for each item name.
///
/// Names are compared lowercase and trimmed; blank names are skipped.
/// Ties on effective price keep the first observation seen.
pub fn select_cheapest_per_item(products: &[PricedProduct]) -> CheapestSelection {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, PricedProduct)> = Vec::new();
    let mut skipped = 0usize;

    for product in products {
        let Some(key) = product.key() else {
            skipped += 1;
            continue;
        };

        match index.get(&key) {
            Some(&slot) => {
                // Strict comparison keeps the earlier entry on ties
                if product.effective_price() < entries[slot].1.effective_price() {
                    entries[slot].1 = product.clone();
                }
            }
            None => {
                index.insert(key.clone(), entries.len());
                entries.push((key, product.clone()));
            }
        }
    }

    debug!(
        observations = products.len(),
        items = entries.len(),
        skipped,
        "selected cheapest option per item"
    );

    CheapestSelection { entries }
}

/// Pairs of distinct item keys that look like the same item.
///
/// Grouping is by exact normalized name, so "milk 1l" and "milk 1 liter"
/// stay separate. This only reports such pairs; it never merges them.
pub fn similar_item_names(selection: &CheapestSelection, threshold: f64) -> Vec<(String, String)> {
    let keys: Vec<&str> = selection.keys().collect();
    let mut pairs = Vec::new();

    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            let score = jaro_winkler(a, b);
            if score >= threshold {
                warn!(first = %a, second = %b, score, "item names look alike but are priced separately");
                pairs.push((a.to_string(), b.to_string()));
            }
        }
    }

    pairs
}
