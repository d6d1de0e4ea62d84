use async_trait::async_trait;

use crate::domain::product::model::Product;

pub struct SearchProductsParams {
    pub term: String,
}

/// Substring search across product fields. A blank term returns the
/// whole catalog.
#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product>;
}
