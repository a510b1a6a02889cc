mod persistence;

pub use persistence::{load_products, load_stores, save_json};
