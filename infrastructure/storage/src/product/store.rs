use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::patch::ProductPatch;
use business::domain::product::store::ProductStore;

/// The catalog's authoritative product list, held in memory behind one
/// store-wide lock. Reads and writes alike run their full lookup scan
/// and mutation inside the critical section, so calls are linearizable
/// and no caller observes a half-applied change. Nothing awaits while
/// the lock is held.
pub struct InMemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductStore {
    /// Builds the store around its initial catalog contents, loaded once
    /// at startup. Mutations live only as long as the process.
    pub fn new(initial: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(initial),
        }
    }

    // A panic while holding the lock cannot leave the list
    // half-mutated, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn require_ean(ean: &str) -> Result<(), ProductError> {
    if ean.trim().is_empty() {
        return Err(ProductError::EanEmpty);
    }
    Ok(())
}

fn matches_term(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.ean.to_lowercase().contains(term)
        || product.brand.to_lowercase().contains(term)
        || product
            .categories
            .iter()
            .any(|category| category.to_lowercase().contains(term))
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get_all(&self) -> Vec<Product> {
        self.lock().clone()
    }

    async fn add(&self, product: Product) -> bool {
        let mut products = self.lock();
        if products.iter().any(|p| p.has_ean(&product.ean)) {
            return false;
        }
        tracing::info!(
            "Added new product: {} (EAN: {})",
            product.full_display_name(),
            product.ean
        );
        products.push(product);
        true
    }

    async fn update(&self, ean: &str, patch: &ProductPatch) -> Result<bool, ProductError> {
        require_ean(ean)?;

        let mut products = self.lock();
        match products.iter_mut().find(|p| p.has_ean(ean)) {
            Some(product) => {
                patch.apply(product);
                tracing::info!("Updated product with EAN: {}", ean);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, ean: &str) -> Result<bool, ProductError> {
        require_ean(ean)?;

        let mut products = self.lock();
        match products.iter().position(|p| p.has_ean(ean)) {
            Some(index) => {
                products.remove(index);
                tracing::info!("Removed product with EAN: {}", ean);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn search(&self, term: &str) -> Vec<Product> {
        let term = term.trim().to_lowercase();
        let products = self.lock();
        if term.is_empty() {
            return products.clone();
        }
        products
            .iter()
            .filter(|product| matches_term(product, &term))
            .cloned()
            .collect()
    }

    async fn update_stock(&self, ean: &str, quantity: i32) -> Result<bool, ProductError> {
        require_ean(ean)?;
        if quantity < 0 {
            return Err(ProductError::NegativeStock);
        }

        let mut products = self.lock();
        match products.iter_mut().find(|p| p.has_ean(ean)) {
            Some(product) => {
                let old_quantity = product.units_in_stock;
                product.units_in_stock = quantity as u32;
                tracing::info!(
                    "Updated stock for product {}: {} -> {}",
                    ean,
                    old_quantity,
                    quantity
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
