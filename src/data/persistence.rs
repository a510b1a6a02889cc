use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PricedProduct, Store, DEFAULT_CURRENCY};

/// CSV row layout for price observations.
#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(default)]
    sku: String,
    #[serde(default)]
    store_id: String,
    name: String,
    price: f64,
    #[serde(default)]
    sale_price: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
}

impl From<ProductRow> for PricedProduct {
    fn from(row: ProductRow) -> Self {
        Self {
            sku: row.sku,
            store_id: row.store_id,
            name: row.name,
            price: row.price,
            sale_price: row.sale_price,
            currency: row
                .currency
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Load price observations from a `.csv` file or a JSON array.
///
/// Input order is preserved; it decides tie-breaks downstream.
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<PricedProduct>> {
    let path = path.as_ref();

    if is_csv(path) {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
        let mut products: Vec<PricedProduct> = Vec::new();
        for row in reader.deserialize::<ProductRow>() {
            products.push(row?.into());
        }
        return Ok(products);
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the store list from a JSON array.
pub fn load_stores<P: AsRef<Path>>(path: P) -> Result<Vec<Store>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write any report as pretty JSON.
pub fn save_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_load_products_json() {
        let json = r#"[
            {"sku": "1", "store_id": "shufersal", "name": "milk", "price": 7.5},
            {"sku": "2", "store_id": "rami-levy", "name": "milk", "price": 6.0, "sale_price": 5.5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].store_id, "shufersal");
        assert_eq!(products[1].sale_price, Some(5.5));
        assert_eq!(products[1].currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_load_products_csv() {
        let csv = "sku,store_id,name,price,sale_price,currency\n\
                   1,shufersal,milk,7.5,,\n\
                   2,rami-levy,bread,12.0,9.9,ILS\n";

        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sale_price, None);
        assert_eq!(products[0].currency, DEFAULT_CURRENCY);
        assert_eq!(products[1].effective_price(), 9.9);
    }

    #[test]
    fn test_load_stores() {
        let json = r#"[{"id": "shufersal", "name": "Shufersal", "delivery_fee": 30}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let stores = load_stores(file.path()).unwrap();
        assert_eq!(stores[0].delivery_fee, 30.0);
    }

    #[test]
    fn test_save_and_reload_products() {
        let products = vec![PricedProduct::new("1", "a", "eggs", 15.0)];
        let out = NamedTempFile::new().unwrap();
        save_json(out.path(), &products).unwrap();

        let reloaded = load_products(out.path()).unwrap();
        assert_eq!(reloaded, products);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_products(file.path()).is_err());
    }
}
