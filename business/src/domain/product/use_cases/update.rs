use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;

pub struct UpdateProductParams {
    pub ean: String,
    /// Blank values leave the stored field unchanged.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Negative values leave the stored cost unchanged.
    pub cost: Option<BigDecimal>,
    pub brand: Option<String>,
    /// Comma-separated category list. An explicit empty string clears
    /// the categories; `None` leaves them untouched.
    pub categories: Option<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<String, ProductError>;
}
