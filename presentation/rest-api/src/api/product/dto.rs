use bigdecimal::ToPrimitive;
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductDto {
    /// Product name
    pub name: String,
    /// Short description of the product
    pub description: String,
    /// EAN barcode; the catalog's unique identity key
    pub ean: String,
    /// Cost/price of the product
    pub cost: f64,
    /// Number of units currently in stock
    pub units_in_stock: u32,
    /// Product categories in insertion order
    pub categories: Vec<String>,
    /// Brand/manufacturer; may be empty
    pub brand: String,
    /// Brand-prefixed display name, computed
    pub full_display_name: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let full_display_name = product.full_display_name();
        Self {
            name: product.name,
            description: product.description,
            ean: product.ean,
            cost: product.cost.to_f64().unwrap_or_default(),
            units_in_stock: product.units_in_stock,
            categories: product.categories,
            brand: product.brand,
            full_display_name,
        }
    }
}

/// Container for a catalog snapshot or search result
#[derive(Debug, Clone, Object)]
pub struct ProductCollectionResponse {
    /// List of products
    pub products: Vec<ProductDto>,
}

impl From<Vec<Product>> for ProductCollectionResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(ProductDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddProductRequest {
    /// Name of the product
    pub name: String,
    /// Short description of the product
    pub description: String,
    /// EAN barcode of the product
    pub ean: String,
    /// Cost/price of the product
    pub cost: f64,
    /// Number of units in stock
    pub units_in_stock: u32,
    /// Brand/manufacturer of the product
    #[oai(default)]
    pub brand: String,
    /// Comma-separated list of product categories
    #[oai(default)]
    pub categories: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New product name; blank leaves the stored name unchanged
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New description; blank leaves the stored description unchanged
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// New cost/price; negative values leave the stored cost unchanged
    #[oai(skip_serializing_if_is_none)]
    pub cost: Option<f64>,
    /// New brand; blank leaves the stored brand unchanged
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// New comma-separated category list; an empty string clears the
    /// categories, omitting the field leaves them untouched
    #[oai(skip_serializing_if_is_none)]
    pub categories: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateStockRequest {
    /// New stock quantity; negative values are rejected
    pub quantity: i32,
}
