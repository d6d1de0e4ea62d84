use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};

pub struct RemoveProductUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<String, ProductError> {
        self.logger
            .info(&format!("Removing product with EAN: {}", params.ean));

        if self.store.remove(&params.ean).await? {
            self.logger
                .info(&format!("Removed product with EAN: {}", params.ean));
            Ok(format!(
                "Successfully removed product with EAN: {}",
                params.ean
            ))
        } else {
            Ok(format!("Product with EAN '{}' not found.", params.ean))
        }
    }
}
