use std::collections::HashSet;

use tracing::debug;

use crate::error::{PilotError, Result};
use crate::models::{PricedProduct, SavingsReport, StoreRegistry};
use crate::pricing::aggregate::{select_cheapest_per_item, CheapestSelection};
use crate::pricing::constants::{round_money, round_to, PERCENT_DECIMALS};
use crate::pricing::plan::{build_plan, group_by_store, resolve_store, validate_products};

/// Single-store comparison point for a savings report.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    pub store_id: String,

    /// List-price sum of the selected items this store carries, plus its fee.
    pub total: f64,

    /// How many of the selected items the store carries.
    pub items_count: usize,
}

/// Most expensive single store among those carrying any selected item.
///
/// Each store is charged its list price (sales ignored) for the first
/// observation of every selected item it carries, plus its delivery fee.
/// Stores carrying fewer items produce smaller candidates. Ties keep the
/// store seen first.
pub fn compute_baseline(
    observed: &[PricedProduct],
    selection: &CheapestSelection,
    stores: &StoreRegistry,
) -> Option<Baseline> {
    let mut best: Option<Baseline> = None;

    for (store_id, products) in group_by_store(observed) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut list_total = 0.0;

        for product in products {
            let Some(key) = product.key() else { continue };
            if selection.contains_key(&key) && seen.insert(key) {
                list_total += product.price;
            }
        }

        if seen.is_empty() {
            continue;
        }

        let total = list_total + resolve_store(stores, &store_id).delivery_fee;
        let beats = best.as_ref().is_none_or(|b| total > b.total);
        if beats {
            best = Some(Baseline {
                store_id,
                total,
                items_count: seen.len(),
            });
        }
    }

    best
}

/// Compare the cheapest cross-store plan against the priciest single store.
///
/// `fee_percent` is the platform fee charged on the savings amount.
pub fn calculate_savings(
    observed: &[PricedProduct],
    stores: &StoreRegistry,
    fee_percent: f64,
) -> Result<SavingsReport> {
    if observed.is_empty() {
        return Err(PilotError::EmptyInput("no products to compare".to_string()));
    }
    if !fee_percent.is_finite() || fee_percent < 0.0 {
        return Err(PilotError::Validation(format!(
            "fee percent must be a non-negative number, got {}",
            fee_percent
        )));
    }

    // Blank-named observations have no group and are skipped, not validated
    let named: Vec<PricedProduct> = observed
        .iter()
        .filter(|p| p.key().is_some())
        .cloned()
        .collect();
    if named.is_empty() {
        return Err(PilotError::EmptyInput(
            "no product has a usable name".to_string(),
        ));
    }
    validate_products(&named)?;

    let selection = select_cheapest_per_item(&named);

    let best_plan = build_plan(&selection.products(), stores)?;

    let (baseline_total, baseline_store) = match compute_baseline(&named, &selection, stores) {
        Some(b) => {
            debug!(
                store_id = %b.store_id,
                total = b.total,
                items = b.items_count,
                "selected baseline store"
            );
            (b.total, b.store_id)
        }
        None => (0.0, String::new()),
    };

    let savings_amount = round_money((baseline_total - best_plan.total).max(0.0));
    let savings_percent = if baseline_total > 0.0 {
        round_to(savings_amount / baseline_total * 100.0, PERCENT_DECIMALS)
    } else {
        0.0
    };
    let fee = round_money(savings_amount * fee_percent / 100.0);
    let net_benefit = round_money(savings_amount - fee);

    debug!(
        best_total = best_plan.total,
        baseline_total, savings_amount, fee, "calculated savings"
    );

    Ok(SavingsReport {
        best_plan,
        baseline_total: round_money(baseline_total),
        baseline_store,
        savings_amount,
        savings_percent,
        fee_percent,
        fee,
        net_benefit,
    })
}
