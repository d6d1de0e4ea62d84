use async_trait::async_trait;

use super::errors::ProductError;
use super::model::Product;
use super::patch::ProductPatch;

/// Port for the catalog's authoritative product collection.
///
/// Every operation is atomic with respect to every other: implementations
/// must behave as if calls execute in some total order (linearizability),
/// and no caller may observe a half-applied mutation. Lookups match the
/// EAN case-insensitively. Presence outcomes (found / not found /
/// already exists) are carried in the returned booleans; only
/// invalid-argument violations surface as errors.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Snapshot of the whole catalog in insertion order. Mutating the
    /// returned products never affects stored state.
    async fn get_all(&self) -> Vec<Product>;

    /// Appends the product unless one with the same normalized EAN is
    /// already present; returns whether it was added.
    async fn add(&self, product: Product) -> bool;

    /// Applies the patch to the matching product in place.
    /// `Ok(false)` when no product matches; the patch is not applied.
    async fn update(&self, ean: &str, patch: &ProductPatch) -> Result<bool, ProductError>;

    /// Removes the matching product; `Ok(false)` when no product matches.
    async fn remove(&self, ean: &str) -> Result<bool, ProductError>;

    /// Case-insensitive substring search over name, description, EAN,
    /// brand, and categories. A blank term behaves exactly like
    /// [`get_all`](Self::get_all).
    async fn search(&self, term: &str) -> Vec<Product>;

    /// Overwrites `units_in_stock` for the matching product.
    /// Rejects negative quantities with [`ProductError::NegativeStock`].
    async fn update_stock(&self, ean: &str, quantity: i32) -> Result<bool, ProductError>;
}
