use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::model::Product;

/// Partial update for a stored product. Each field is independent;
/// `None` always means "leave unchanged".
///
/// Merge policy per field:
/// - `name`/`description`/`brand`: applied only when non-blank after
///   trimming; a blank value is a no-op, never a clear.
/// - `cost`: applied only when non-negative.
/// - `categories`: applied whenever present, including an empty list
///   (explicit empty clears the categories).
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<BigDecimal>,
    pub brand: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name
            && !name.trim().is_empty()
        {
            product.name = name.trim().to_string();
        }

        if let Some(description) = &self.description
            && !description.trim().is_empty()
        {
            product.description = description.trim().to_string();
        }

        if let Some(cost) = &self.cost
            && *cost >= BigDecimal::zero()
        {
            product.cost = cost.clone();
        }

        if let Some(brand) = &self.brand
            && !brand.trim().is_empty()
        {
            product.brand = brand.trim().to_string();
        }

        if let Some(categories) = &self.categories {
            product.categories = categories.clone();
        }
    }
}
