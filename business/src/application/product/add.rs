use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::add::{AddProductParams, AddProductUseCase};
use crate::domain::product::value_objects::parse_categories;

pub struct AddProductUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> String {
        let product = Product::new(NewProductProps {
            name: params.name.trim().to_string(),
            description: params.description.trim().to_string(),
            ean: params.ean.trim().to_string(),
            cost: params.cost,
            units_in_stock: params.units_in_stock,
            categories: parse_categories(&params.categories),
            brand: params.brand.trim().to_string(),
        });

        let display_name = product.full_display_name();
        let ean = product.ean.clone();

        self.logger
            .info(&format!("Adding product with EAN: {}", ean));

        if self.store.add(product).await {
            self.logger
                .info(&format!("Added new product: {} (EAN: {})", display_name, ean));
            format!(
                "Successfully added product: {} (EAN: {})",
                display_name, ean
            )
        } else {
            self.logger
                .warn(&format!("Product with EAN {} already exists", ean));
            format!("Product with EAN '{}' already exists.", ean)
        }
    }
}
