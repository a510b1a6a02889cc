use serde::{Deserialize, Serialize};

/// Checkout URL for one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLink {
    pub store_id: String,
    pub url: String,
}

/// Checkout links for every store in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLinks {
    pub checkout_links: Vec<CheckoutLink>,

    /// Plan total the links were built for.
    pub total: f64,

    pub currency: String,
}

impl CheckoutLinks {
    pub fn store_count(&self) -> usize {
        self.checkout_links.len()
    }

    pub fn url_for(&self, store_id: &str) -> Option<&str> {
        self.checkout_links
            .iter()
            .find(|l| l.store_id == store_id)
            .map(|l| l.url.as_str())
    }
}

/// What the user sees once carts are ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub checkout_links: Vec<CheckoutLink>,
    pub total: f64,
    pub currency: String,
    pub savings_amount: f64,
}
