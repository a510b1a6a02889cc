use dialoguer::Confirm;

use crate::error::Result;
use crate::interface::render::format_money;
use crate::models::SavingsReport;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask whether to build carts for the best plan.
///
/// Defaults to "no" when the plan saves nothing.
pub fn confirm_checkout(report: &SavingsReport) -> Result<bool> {
    let stores = report.best_plan.stores.len();
    let prompt = format!(
        "Build checkout links for {} store{} ({} total)?",
        stores,
        if stores == 1 { "" } else { "s" },
        format_money(report.best_plan.total, &report.best_plan.currency)
    );
    prompt_yes_no(&prompt, report.savings_amount > 0.0)
}
