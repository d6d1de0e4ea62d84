use async_trait::async_trait;
use bigdecimal::BigDecimal;

pub struct AddProductParams {
    pub name: String,
    pub description: String,
    pub ean: String,
    pub cost: BigDecimal,
    pub units_in_stock: u32,
    /// May be empty.
    pub brand: String,
    /// Comma-separated category list; may be empty.
    pub categories: String,
}

/// Adds a product to the catalog and reports the outcome as
/// caller-facing text. An already-present EAN is a normal outcome
/// carried in the message, not an error.
#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> String;
}
