use serde::{Deserialize, Serialize};

/// One product allocated to a store in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedItem {
    pub sku: String,

    pub name: String,

    /// Effective price, rounded to cents.
    pub price: f64,
}

/// Per-store slice of a pricing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreBreakdown {
    pub store_id: String,

    pub store_name: String,

    pub items_count: usize,

    pub subtotal: f64,

    pub delivery_fee: f64,

    /// Always `subtotal + delivery_fee`.
    pub total: f64,

    pub items: Vec<PlannedItem>,
}

/// Products grouped by store with totals.
///
/// Money fields are rounded to cents; `total` is the sum of the rounded
/// `subtotal` and `delivery_fees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Participating stores, in order of first appearance.
    pub stores: Vec<String>,

    pub currency: String,

    pub subtotal: f64,

    pub delivery_fees: f64,

    pub total: f64,

    pub store_breakdown: Vec<StoreBreakdown>,
}

impl PricingPlan {
    /// A plan with no stores and all totals at zero.
    pub fn empty(currency: &str) -> Self {
        Self {
            stores: Vec::new(),
            currency: currency.to_string(),
            subtotal: 0.0,
            delivery_fees: 0.0,
            total: 0.0,
            store_breakdown: Vec::new(),
        }
    }

    /// Total number of allocated products across stores.
    pub fn item_count(&self) -> usize {
        self.store_breakdown.iter().map(|b| b.items_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.store_breakdown.is_empty()
    }

    pub fn breakdown_for(&self, store_id: &str) -> Option<&StoreBreakdown> {
        self.store_breakdown.iter().find(|b| b.store_id == store_id)
    }
}

/// Best plan compared against the single-store baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsReport {
    pub best_plan: PricingPlan,

    pub baseline_total: f64,

    pub baseline_store: String,

    /// Never negative.
    pub savings_amount: f64,

    /// Percentage of the baseline, one decimal.
    pub savings_percent: f64,

    /// Platform fee percent the report was computed with.
    pub fee_percent: f64,

    pub fee: f64,

    pub net_benefit: f64,
}
