use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct RemoveProductParams {
    pub ean: String,
}

#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Result<String, ProductError>;
}
