use std::env;
use std::path::PathBuf;

/// Location of the JSON document the catalog is seeded from at startup.
///
/// Environment variables:
/// - PRODUCTS_PATH: Path to the products file (default: "data/products.json")
///
/// A missing or unreadable file is not fatal; the service starts with an
/// empty catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub products_path: PathBuf,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let products_path = env::var("PRODUCTS_PATH")
            .unwrap_or_else(|_| "data/products.json".to_string())
            .into();

        Self { products_path }
    }
}
