pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;

pub use config::PricingConfig;
pub use error::{PilotError, Result};
pub use models::{PricedProduct, PricingPlan, SavingsReport, Store, StoreRegistry};
