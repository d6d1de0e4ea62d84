use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::low_stock::{GetLowStockProductsUseCase, LowStockParams};

pub struct GetLowStockProductsUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLowStockProductsUseCase for GetLowStockProductsUseCaseImpl {
    async fn execute(&self, params: LowStockParams) -> Vec<Product> {
        self.logger.info(&format!(
            "Listing products with stock at or below {}",
            params.threshold
        ));

        // Threshold is inclusive; catalog order is kept, no sorting by
        // scarcity.
        let low_stock: Vec<Product> = self
            .store
            .get_all()
            .await
            .into_iter()
            .filter(|product| product.units_in_stock <= params.threshold)
            .collect();

        self.logger
            .info(&format!("Found {} low-stock products", low_stock.len()));
        low_stock
    }
}
