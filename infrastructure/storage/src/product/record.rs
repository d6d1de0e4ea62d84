use bigdecimal::{BigDecimal, FromPrimitive};
use serde::Deserialize;

use business::domain::product::model::{NewProductProps, Product};

/// Wire shape of one product in the seed document. Field names are
/// lower snake case; `categories` and `brand` may be omitted.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub ean: String,
    pub cost: f64,
    pub units_in_stock: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub brand: String,
}

impl ProductRecord {
    pub fn into_domain(self) -> Product {
        Product::new(NewProductProps {
            name: self.name,
            description: self.description,
            ean: self.ean,
            // NaN/infinite costs cannot appear in valid JSON numbers.
            cost: BigDecimal::from_f64(self.cost).unwrap_or_default(),
            units_in_stock: self.units_in_stock,
            categories: self.categories,
            brand: self.brand,
        })
    }
}
