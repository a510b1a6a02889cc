pub mod checkout;
pub mod item;
pub mod plan;
pub mod product;

pub use checkout::{CheckoutLink, CheckoutLinks, CheckoutSummary};
pub use item::GroceryItem;
pub use plan::{PlannedItem, PricingPlan, SavingsReport, StoreBreakdown};
pub use product::{
    normalize_item_name, store_registry, PricedProduct, Store, StoreRegistry, DEFAULT_CURRENCY,
};
