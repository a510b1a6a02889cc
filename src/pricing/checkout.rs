use crate::models::{CheckoutLink, CheckoutLinks, CheckoutSummary, PricingPlan, SavingsReport};

/// Checkout URL for a store's cart.
///
/// The browser session captures the real URL in production; this builds a
/// link with the same shape.
pub fn checkout_url(store_id: &str, session: &str) -> String {
    format!("https://{}.co.il/checkout?session={}", store_id, session)
}

/// One checkout link per store in the plan, in breakdown order.
pub fn generate_checkout_links(plan: &PricingPlan, session: &str) -> CheckoutLinks {
    CheckoutLinks {
        checkout_links: plan
            .store_breakdown
            .iter()
            .map(|b| CheckoutLink {
                store_id: b.store_id.clone(),
                url: checkout_url(&b.store_id, session),
            })
            .collect(),
        total: plan.total,
        currency: plan.currency.clone(),
    }
}

/// Combine checkout links with the savings they were built from.
pub fn checkout_summary(links: &CheckoutLinks, report: &SavingsReport) -> CheckoutSummary {
    CheckoutSummary {
        checkout_links: links.checkout_links.clone(),
        total: links.total,
        currency: links.currency.clone(),
        savings_amount: report.savings_amount,
    }
}
