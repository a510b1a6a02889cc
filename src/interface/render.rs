use crate::models::{CheckoutSummary, PricingPlan, SavingsReport};
use crate::pricing::constants::currency_symbol;

/// Money with exactly two decimals and the currency symbol.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency_symbol(currency), amount)
}

/// Render a savings report for chat or terminal display.
pub fn format_savings_report(report: &SavingsReport) -> String {
    let currency = report.best_plan.currency.as_str();
    let money = |v: f64| format_money(v, currency);

    let mut lines = vec![
        "💰 **Savings Report**".to_string(),
        String::new(),
        format!("Best plan total: {}", money(report.best_plan.total)),
        format!("Baseline total: {}", money(report.baseline_total)),
        format!(
            "You save: {} ({:.1}%)",
            money(report.savings_amount),
            report.savings_percent
        ),
        format!(
            "PricePilot fee ({}%): {}",
            report.fee_percent,
            money(report.fee)
        ),
        format!("**Net benefit: {}**", money(report.net_benefit)),
        String::new(),
    ];

    for b in &report.best_plan.store_breakdown {
        lines.push(format!(
            "📦 {}: {} ({} items)",
            b.store_name,
            money(b.total),
            b.items_count
        ));
    }

    lines.join("\n")
}

/// Render a pricing plan with per-store item lists.
pub fn format_pricing_plan(plan: &PricingPlan) -> String {
    if plan.is_empty() {
        return "No products selected.".to_string();
    }

    let currency = plan.currency.as_str();
    let max_name_len = plan
        .store_breakdown
        .iter()
        .flat_map(|b| b.items.iter())
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10);

    let mut lines = vec!["=== Pricing Plan ===".to_string()];

    for b in &plan.store_breakdown {
        lines.push(String::new());
        lines.push(format!("{} ({} items)", b.store_name, b.items_count));
        for item in &b.items {
            lines.push(format!(
                "  {:<width$}  {:>10}",
                item.name,
                format_money(item.price, currency),
                width = max_name_len
            ));
        }
        lines.push(format!("  Subtotal: {}", format_money(b.subtotal, currency)));
        lines.push(format!("  Delivery: {}", format_money(b.delivery_fee, currency)));
        lines.push(format!("  Total:    {}", format_money(b.total, currency)));
    }

    lines.push(String::new());
    lines.push("--- Summary ---".to_string());
    lines.push(format!("Stores: {}", plan.stores.len()));
    lines.push(format!("Items: {}", plan.item_count()));
    lines.push(format!("Subtotal: {}", format_money(plan.subtotal, currency)));
    lines.push(format!(
        "Delivery fees: {}",
        format_money(plan.delivery_fees, currency)
    ));
    lines.push(format!("Total: {}", format_money(plan.total, currency)));

    lines.join("\n")
}

/// Render the final checkout summary with one link per store.
pub fn format_checkout_summary(summary: &CheckoutSummary) -> String {
    let currency = summary.currency.as_str();
    let mut lines = vec!["✅ **Your carts are ready!**".to_string(), String::new()];

    for link in &summary.checkout_links {
        lines.push(format!("🛒 [{}]({})", link.store_id, link.url));
    }

    lines.push(String::new());
    lines.push(format!("Total: {}", format_money(summary.total, currency)));
    lines.push(format!(
        "You save: {}",
        format_money(summary.savings_amount, currency)
    ));
    lines.push(String::new());
    lines.push("Click the links above to complete your purchase at each store.".to_string());

    lines.join("\n")
}

/// Print a savings report to stdout.
pub fn display_savings_report(report: &SavingsReport) {
    println!();
    println!("{}", format_savings_report(report));
    println!();
}

/// Print a pricing plan to stdout.
pub fn display_pricing_plan(plan: &PricingPlan) {
    println!();
    println!("{}", format_pricing_plan(plan));
    println!();
}

/// Print a checkout summary to stdout.
pub fn display_checkout_summary(summary: &CheckoutSummary) {
    println!();
    println!("{}", format_checkout_summary(summary));
    println!();
}
