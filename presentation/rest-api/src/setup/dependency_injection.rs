use std::sync::Arc;

use logger::TracingLogger;
use storage::product::store::InMemoryProductStore;

use business::application::product::add::AddProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::low_stock::GetLowStockProductsUseCaseImpl;
use business::application::product::remove::RemoveProductUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::update_stock::UpdateStockUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::store::ProductStore;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Wires the one long-lived store instance (constructed here from
    /// the seeded catalog) into every use case.
    pub fn new(initial_products: Vec<Product>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new(initial_products));

        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let update_stock_use_case = Arc::new(UpdateStockUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let low_stock_use_case = Arc::new(GetLowStockProductsUseCaseImpl {
            store,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            list_use_case,
            add_use_case,
            update_use_case,
            update_stock_use_case,
            remove_use_case,
            search_use_case,
            low_stock_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
