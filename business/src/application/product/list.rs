use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::list::ListProductsUseCase;

pub struct ListProductsUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self) -> Vec<Product> {
        self.logger.info("Listing all products");
        let products = self.store.get_all().await;
        self.logger
            .info(&format!("Catalog holds {} products", products.len()));
        products
    }
}
