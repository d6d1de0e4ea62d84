use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::patch::ProductPatch;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::parse_categories;

pub struct UpdateProductUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<String, ProductError> {
        self.logger
            .info(&format!("Updating product with EAN: {}", params.ean));

        let patch = ProductPatch {
            name: params.name,
            description: params.description,
            cost: params.cost,
            brand: params.brand,
            // A present-but-empty categories argument clears the list;
            // an absent one leaves it untouched.
            categories: params.categories.as_deref().map(parse_categories),
        };

        if self.store.update(&params.ean, &patch).await? {
            self.logger
                .info(&format!("Updated product with EAN: {}", params.ean));
            Ok(format!(
                "Successfully updated product with EAN: {}",
                params.ean
            ))
        } else {
            Ok(format!("Product with EAN '{}' not found.", params.ean))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use bigdecimal::{BigDecimal, FromPrimitive};
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

    fn bare_params(ean: &str) -> UpdateProductParams {
        UpdateProductParams {
            ean: ean.to_string(),
            name: None,
            description: None,
            cost: None,
            brand: None,
            categories: None,
        }
    }

    #[tokio::test]
    async fn should_report_success_when_product_exists() {
        let mut mock_store = MockStore::new();
        mock_store.expect_update().returning(|_, _| Ok(true));

        let use_case = UpdateProductUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let message = use_case.execute(bare_params("4006381333931")).await.unwrap();

        assert_eq!(
            message,
            "Successfully updated product with EAN: 4006381333931"
        );
    }

    #[tokio::test]
    async fn should_report_not_found_when_product_absent() {
        let mut mock_store = MockStore::new();
        mock_store.expect_update().returning(|_, _| Ok(false));

        let use_case = UpdateProductUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let message = use_case.execute(bare_params("0000000000000")).await.unwrap();

        assert_eq!(message, "Product with EAN '0000000000000' not found.");
    }

    #[tokio::test]
    async fn should_propagate_blank_ean_error() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_update()
            .returning(|_, _| Err(ProductError::EanEmpty));

        let use_case = UpdateProductUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute(bare_params("   ")).await;

        assert!(matches!(result.unwrap_err(), ProductError::EanEmpty));
    }

    #[tokio::test]
    async fn should_parse_categories_only_when_present() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_update()
            .withf(|_, patch| patch.categories.is_none())
            .returning(|_, _| Ok(true));

        let use_case = UpdateProductUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        use_case.execute(bare_params("4006381333931")).await.unwrap();
    }

    #[tokio::test]
    async fn should_map_empty_categories_string_to_explicit_clear() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_update()
            .withf(|_, patch| matches!(patch.categories.as_deref(), Some([])))
            .returning(|_, _| Ok(true));

        let use_case = UpdateProductUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let mut params = bare_params("4006381333931");
        params.categories = Some(String::new());
        use_case.execute(params).await.unwrap();
    }

    #[tokio::test]
    async fn should_forward_optional_fields_into_patch() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_update()
            .withf(|ean, patch| {
                ean == "4006381333931"
                    && patch.name.as_deref() == Some("New Name")
                    && patch.cost == Some(BigDecimal::from_f64(9.99).unwrap())
                    && patch.categories.as_deref().is_some_and(|c| *c == ["a", "b"])
            })
            .returning(|_, _| Ok(true));

        let use_case = UpdateProductUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let params = UpdateProductParams {
            ean: "4006381333931".to_string(),
            name: Some("New Name".to_string()),
            description: None,
            cost: Some(BigDecimal::from_f64(9.99).unwrap()),
            brand: None,
            categories: Some("a, b".to_string()),
        };
        use_case.execute(params).await.unwrap();
    }
}
