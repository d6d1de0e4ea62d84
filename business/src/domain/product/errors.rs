/// Invalid-argument failures for catalog operations.
/// Use code-style identifiers for all error variants for i18n
/// compatibility. "Not found" and "already exists" are expected
/// outcomes, not errors, and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.ean_empty")]
    EanEmpty,
    #[error("product.negative_stock")]
    NegativeStock,
}
