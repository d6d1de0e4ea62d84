use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::update_stock::{UpdateStockParams, UpdateStockUseCase};

pub struct UpdateStockUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateStockUseCase for UpdateStockUseCaseImpl {
    async fn execute(&self, params: UpdateStockParams) -> Result<String, ProductError> {
        // Rejected here as a normal user-facing outcome; the store's
        // NegativeStock error stays reserved for direct misuse.
        if params.new_quantity < 0 {
            self.logger.warn(&format!(
                "Rejected negative stock quantity {} for EAN: {}",
                params.new_quantity, params.ean
            ));
            return Ok("Stock quantity cannot be negative.".to_string());
        }

        if self
            .store
            .update_stock(&params.ean, params.new_quantity)
            .await?
        {
            self.logger.info(&format!(
                "Updated stock for product {} to {}",
                params.ean, params.new_quantity
            ));
            Ok(format!(
                "Successfully updated stock for product EAN {} to {} units.",
                params.ean, params.new_quantity
            ))
        } else {
            Ok(format!("Product with EAN '{}' not found.", params.ean))
        }
    }
}
