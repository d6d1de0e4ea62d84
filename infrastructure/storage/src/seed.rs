use std::fs;
use std::path::Path;

use business::domain::product::model::Product;

use crate::product::record::ProductRecord;

/// Loads the initial catalog from a JSON document. A missing or
/// unreadable file degrades to an empty catalog so startup never fails
/// on a bad seed path; the warning carries the resolved path so
/// misconfiguration stays visible in the logs.
pub fn load_products(path: &Path) -> Vec<Product> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(
                "Could not read products file {}: {}. Starting with an empty catalog.",
                path.display(),
                err
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ProductRecord>>(&contents) {
        Ok(records) => {
            let products: Vec<Product> =
                records.into_iter().map(ProductRecord::into_domain).collect();
            tracing::info!(
                "Loaded {} products from {}",
                products.len(),
                path.display()
            );
            products
        }
        Err(err) => {
            tracing::warn!(
                "Could not parse products file {}: {}. Starting with an empty catalog.",
                path.display(),
                err
            );
            Vec::new()
        }
    }
}
