use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct UpdateStockParams {
    pub ean: String,
    pub new_quantity: i32,
}

/// Overwrites a product's stock level. A negative quantity is rejected
/// locally with a user-facing message before the store is touched.
#[async_trait]
pub trait UpdateStockUseCase: Send + Sync {
    async fn execute(&self, params: UpdateStockParams) -> Result<String, ProductError>;
}
