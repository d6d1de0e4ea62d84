use async_trait::async_trait;

use crate::domain::product::model::Product;

pub struct LowStockParams {
    /// Inclusive stock threshold.
    pub threshold: u32,
}

impl Default for LowStockParams {
    fn default() -> Self {
        Self { threshold: 10 }
    }
}

#[async_trait]
pub trait GetLowStockProductsUseCase: Send + Sync {
    async fn execute(&self, params: LowStockParams) -> Vec<Product>;
}
