pub mod aggregate;
pub mod checkout;
pub mod constants;
pub mod plan;
pub mod savings;

pub use aggregate::{select_cheapest_per_item, similar_item_names, CheapestSelection};
pub use checkout::{checkout_summary, checkout_url, generate_checkout_links};
pub use constants::*;
pub use plan::{build_plan, resolve_store, validate_product, validate_products};
pub use savings::{calculate_savings, compute_baseline, Baseline};
