pub mod prompts;
pub mod render;

pub use prompts::{confirm_checkout, prompt_yes_no};
pub use render::{
    display_checkout_summary, display_pricing_plan, display_savings_report,
    format_checkout_summary, format_money, format_pricing_plan, format_savings_report,
};
