use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{PilotError, Result};
use crate::models::{
    PlannedItem, PricedProduct, PricingPlan, Store, StoreBreakdown, StoreRegistry,
    DEFAULT_CURRENCY,
};
use crate::pricing::constants::round_money;

/// Check one observation for structural problems.
pub fn validate_product(product: &PricedProduct) -> Result<()> {
    if !product.has_store() {
        return Err(PilotError::Validation(format!(
            "product '{}' (sku '{}') has no store id",
            product.name, product.sku
        )));
    }

    let prices = std::iter::once(product.price).chain(product.sale_price);
    for price in prices {
        if !price.is_finite() || price < 0.0 {
            return Err(PilotError::Validation(format!(
                "product '{}' at '{}' has invalid price {}",
                product.name, product.store_id, price
            )));
        }
    }

    Ok(())
}

/// Validate every product and return their shared currency.
///
/// An empty slice reports the default currency.
pub fn validate_products(products: &[PricedProduct]) -> Result<String> {
    let currency = products
        .first()
        .map(|p| p.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    for product in products {
        validate_product(product)?;
        if product.currency != currency {
            return Err(PilotError::Validation(format!(
                "product '{}' at '{}' is priced in {}, expected {}",
                product.name, product.store_id, product.currency, currency
            )));
        }
    }

    Ok(currency)
}

/// Registry entry for a store, or a zero-fee stand-in named by its id.
///
/// Negative or non-finite delivery fees are treated as zero.
pub fn resolve_store(stores: &StoreRegistry, store_id: &str) -> Store {
    match stores.get(store_id) {
        Some(store) if !store.delivery_fee.is_finite() || store.delivery_fee < 0.0 => {
            warn!(
                store_id,
                delivery_fee = store.delivery_fee,
                "invalid delivery fee in registry, using zero"
            );
            Store {
                delivery_fee: 0.0,
                ..store.clone()
            }
        }
        Some(store) => store.clone(),
        None => {
            debug!(store_id, "store missing from registry, using zero delivery fee");
            Store::synthetic(store_id)
        }
    }
}

/// Group products by store in order of first appearance.
pub(crate) fn group_by_store(products: &[PricedProduct]) -> Vec<(String, Vec<&PricedProduct>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&PricedProduct>)> = Vec::new();

    for product in products {
        match index.get(product.store_id.as_str()) {
            Some(&slot) => groups[slot].1.push(product),
            None => {
                index.insert(product.store_id.as_str(), groups.len());
                groups.push((product.store_id.clone(), vec![product]));
            }
        }
    }

    groups
}

/// Build a pricing plan from the final product selection.
///
/// Totals are accumulated unrounded and rounded once when written to the plan.
pub fn build_plan(selected: &[PricedProduct], stores: &StoreRegistry) -> Result<PricingPlan> {
    let currency = validate_products(selected)?;
    if selected.is_empty() {
        return Ok(PricingPlan::empty(&currency));
    }

    let mut subtotal = 0.0;
    let mut delivery_fees = 0.0;
    let mut breakdown = Vec::new();

    for (store_id, items) in group_by_store(selected) {
        let store = resolve_store(stores, &store_id);
        let store_subtotal: f64 = items.iter().map(|p| p.effective_price()).sum();

        subtotal += store_subtotal;
        delivery_fees += store.delivery_fee;

        let rounded_subtotal = round_money(store_subtotal);
        let rounded_fee = round_money(store.delivery_fee);

        breakdown.push(StoreBreakdown {
            store_id,
            store_name: store.name,
            items_count: items.len(),
            subtotal: rounded_subtotal,
            delivery_fee: rounded_fee,
            total: rounded_subtotal + rounded_fee,
            items: items
                .iter()
                .map(|p| PlannedItem {
                    sku: p.sku.clone(),
                    name: p.name.clone(),
                    price: round_money(p.effective_price()),
                })
                .collect(),
        });
    }

    let subtotal = round_money(subtotal);
    let delivery_fees = round_money(delivery_fees);

    debug!(
        stores = breakdown.len(),
        items = selected.len(),
        subtotal,
        delivery_fees,
        "built pricing plan"
    );

    Ok(PricingPlan {
        stores: breakdown.iter().map(|b| b.store_id.clone()).collect(),
        currency,
        subtotal,
        delivery_fees,
        total: subtotal + delivery_fees,
        store_breakdown: breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::store_registry;

    fn stores() -> StoreRegistry {
        store_registry(vec![
            Store::new("shufersal", "Shufersal", 30.0),
            Store::new("rami-levy", "Rami Levy", 25.0),
        ])
    }

    #[test]
    fn test_build_plan_groups_by_store() {
        let selected = vec![
            PricedProduct::new("1", "shufersal", "milk", 7.5),
            PricedProduct::new("2", "shufersal", "bread", 10.0),
            PricedProduct::new("3", "rami-levy", "eggs", 15.0),
        ];
        let plan = build_plan(&selected, &stores()).unwrap();

        assert_eq!(plan.stores, vec!["shufersal", "rami-levy"]);
        assert_eq!(plan.store_breakdown.len(), 2);
        assert_eq!(plan.subtotal, 32.5);
        assert_eq!(plan.delivery_fees, 55.0);
        assert_eq!(plan.total, 87.5);

        let shufersal = plan.breakdown_for("shufersal").unwrap();
        assert_eq!(shufersal.items_count, 2);
        assert_eq!(shufersal.subtotal, 17.5);
        assert_eq!(shufersal.total, 47.5);
        assert_eq!(shufersal.items[1].name, "bread");
    }

    #[test]
    fn test_breakdown_order_follows_first_appearance() {
        let selected = vec![
            PricedProduct::new("1", "rami-levy", "eggs", 15.0),
            PricedProduct::new("2", "shufersal", "milk", 7.5),
            PricedProduct::new("3", "rami-levy", "cheese", 20.0),
        ];
        let plan = build_plan(&selected, &stores()).unwrap();
        assert_eq!(plan.stores, vec!["rami-levy", "shufersal"]);
        assert_eq!(plan.store_breakdown[0].items_count, 2);
    }

    #[test]
    fn test_unknown_store_is_synthetic() {
        let selected = vec![PricedProduct::new("1", "victory", "milk", 6.0)];
        let plan = build_plan(&selected, &stores()).unwrap();

        let b = &plan.store_breakdown[0];
        assert_eq!(b.store_name, "victory");
        assert_eq!(b.delivery_fee, 0.0);
        assert_eq!(plan.total, 6.0);
    }

    #[test]
    fn test_missing_store_id_rejected() {
        let selected = vec![PricedProduct::new("1", " ", "milk", 6.0)];
        let err = build_plan(&selected, &stores()).unwrap_err();
        assert!(matches!(err, PilotError::Validation(_)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let selected = vec![PricedProduct::new("1", "shufersal", "milk", -1.0)];
        let err = build_plan(&selected, &stores()).unwrap_err();
        assert!(matches!(err, PilotError::Validation(_)));

        let sale = vec![PricedProduct::new("1", "shufersal", "milk", 5.0).with_sale_price(-0.5)];
        assert!(build_plan(&sale, &stores()).is_err());
    }

    #[test]
    fn test_invalid_list_price_rejected_under_sale() {
        let inf = vec![PricedProduct::new("1", "shufersal", "milk", f64::INFINITY).with_sale_price(5.0)];
        assert!(matches!(
            build_plan(&inf, &stores()).unwrap_err(),
            PilotError::Validation(_)
        ));

        let negative = vec![PricedProduct::new("1", "shufersal", "milk", -3.0).with_sale_price(-4.0)];
        assert!(build_plan(&negative, &stores()).is_err());

        let nan_sale = vec![PricedProduct::new("1", "shufersal", "milk", 5.0).with_sale_price(f64::NAN)];
        assert!(validate_product(&nan_sale[0]).is_err());
    }

    #[test]
    fn test_negative_delivery_fee_treated_as_zero() {
        let registry = store_registry(vec![Store::new("shufersal", "Shufersal", -50.0)]);
        let selected = vec![PricedProduct::new("1", "shufersal", "milk", 10.0)];
        let plan = build_plan(&selected, &registry).unwrap();

        assert_eq!(plan.delivery_fees, 0.0);
        assert_eq!(plan.total, 10.0);
        assert_eq!(plan.store_breakdown[0].store_name, "Shufersal");
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let selected = vec![
            PricedProduct::new("1", "shufersal", "milk", 6.0),
            PricedProduct::new("2", "rami-levy", "bread", 6.0).with_currency("USD"),
        ];
        let err = build_plan(&selected, &stores()).unwrap_err();
        assert!(matches!(err, PilotError::Validation(_)));
    }

    #[test]
    fn test_empty_selection() {
        let plan = build_plan(&[], &stores()).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.total, 0.0);
    }

    #[test]
    fn test_rounding_happens_at_output() {
        let selected = vec![
            PricedProduct::new("1", "shufersal", "a", 0.1),
            PricedProduct::new("2", "shufersal", "b", 0.2),
        ];
        let plan = build_plan(&selected, &stores()).unwrap();
        assert_eq!(plan.subtotal, 0.3);
        assert_eq!(plan.total, plan.subtotal + plan.delivery_fees);
    }
}
