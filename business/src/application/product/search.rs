use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product> {
        self.logger
            .info(&format!("Searching products for: {:?}", params.term));
        let matches = self.store.search(&params.term).await;
        self.logger
            .info(&format!("Search matched {} products", matches.len()));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::errors::ProductError;
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::patch::ProductPatch;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl ProductStore for Store {
            async fn get_all(&self) -> Vec<Product>;
            async fn add(&self, product: Product) -> bool;
            async fn update(&self, ean: &str, patch: &ProductPatch) -> Result<bool, ProductError>;
            async fn remove(&self, ean: &str) -> Result<bool, ProductError>;
            async fn search(&self, term: &str) -> Vec<Product>;
            async fn update_stock(&self, ean: &str, quantity: i32) -> Result<bool, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delegate_term_to_store() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_search()
            .withf(|term| term == "coffee")
            .returning(|_| {
                vec![Product::new(NewProductProps {
                    name: "Espresso Beans".to_string(),
                    description: String::new(),
                    ean: "8711000530085".to_string(),
                    cost: BigDecimal::from(7),
                    units_in_stock: 12,
                    categories: vec!["coffee".to_string()],
                    brand: String::new(),
                })]
            });

        let use_case = SearchProductsUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(SearchProductsParams {
                term: "coffee".to_string(),
            })
            .await;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Espresso Beans");
    }

    #[tokio::test]
    async fn should_return_empty_when_nothing_matches() {
        let mut mock_store = MockStore::new();
        mock_store.expect_search().returning(|_| Vec::new());

        let use_case = SearchProductsUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(SearchProductsParams {
                term: "nothing".to_string(),
            })
            .await;

        assert!(products.is_empty());
    }
}
