use std::sync::Arc;

use bigdecimal::{BigDecimal, FromPrimitive};
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::{Json, PlainText},
};

use business::domain::product::use_cases::add::{AddProductParams, AddProductUseCase};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::low_stock::{
    GetLowStockProductsUseCase, LowStockParams,
};
use business::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::use_cases::update_stock::{UpdateStockParams, UpdateStockUseCase};

use crate::api::product::error_mapper::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    AddProductRequest, ProductCollectionResponse, UpdateProductRequest, UpdateStockRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    add_use_case: Arc<dyn AddProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    update_stock_use_case: Arc<dyn UpdateStockUseCase>,
    remove_use_case: Arc<dyn RemoveProductUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    low_stock_use_case: Arc<dyn GetLowStockProductsUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        add_use_case: Arc<dyn AddProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        update_stock_use_case: Arc<dyn UpdateStockUseCase>,
        remove_use_case: Arc<dyn RemoveProductUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        low_stock_use_case: Arc<dyn GetLowStockProductsUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            add_use_case,
            update_use_case,
            update_stock_use_case,
            remove_use_case,
            search_use_case,
            low_stock_use_case,
        }
    }
}

/// Product catalog API
///
/// Remote-callable catalog operations. Mutation endpoints answer with a
/// human-readable status string; "not found" and "already exists" are
/// normal 200 outcomes carried in that text, never error statuses.
#[OpenApi]
impl ProductApi {
    /// List the whole product catalog
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> Json<ProductCollectionResponse> {
        let products = self.list_use_case.execute().await;
        Json(products.into())
    }

    /// Add a new product to the catalog
    ///
    /// Reports a conflict message when a product with the same EAN
    /// (case-insensitive) already exists.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn add_product(&self, body: Json<AddProductRequest>) -> PlainText<String> {
        let message = self
            .add_use_case
            .execute(AddProductParams {
                name: body.0.name,
                description: body.0.description,
                ean: body.0.ean,
                cost: BigDecimal::from_f64(body.0.cost).unwrap_or_default(),
                units_in_stock: body.0.units_in_stock,
                brand: body.0.brand,
                categories: body.0.categories,
            })
            .await;
        PlainText(message)
    }

    /// Update an existing product by EAN
    ///
    /// Partial update: omitted fields are left unchanged; blank strings
    /// and negative costs are treated as "no change" rather than errors.
    #[oai(path = "/products/:ean", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        ean: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            ean: ean.0,
            name: body.0.name,
            description: body.0.description,
            cost: body.0.cost.and_then(BigDecimal::from_f64),
            brand: body.0.brand,
            categories: body.0.categories,
        };

        match self.update_use_case.execute(params).await {
            Ok(message) => UpdateProductResponse::Ok(PlainText(message)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateProductResponse::BadRequest(json)
            }
        }
    }

    /// Overwrite the stock quantity for a product
    #[oai(
        path = "/products/:ean/stock",
        method = "put",
        tag = "ApiTags::Products"
    )]
    async fn update_stock(
        &self,
        ean: Path<String>,
        body: Json<UpdateStockRequest>,
    ) -> UpdateStockResponse {
        let params = UpdateStockParams {
            ean: ean.0,
            new_quantity: body.0.quantity,
        };

        match self.update_stock_use_case.execute(params).await {
            Ok(message) => UpdateStockResponse::Ok(PlainText(message)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateStockResponse::BadRequest(json)
            }
        }
    }

    /// Remove a product by EAN
    #[oai(path = "/products/:ean", method = "delete", tag = "ApiTags::Products")]
    async fn remove_product(&self, ean: Path<String>) -> RemoveProductResponse {
        match self
            .remove_use_case
            .execute(RemoveProductParams { ean: ean.0 })
            .await
        {
            Ok(message) => RemoveProductResponse::Ok(PlainText(message)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveProductResponse::BadRequest(json)
            }
        }
    }

    /// Search products by name, description, EAN, brand, or category
    ///
    /// A blank or omitted term returns the whole catalog.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, term: Query<Option<String>>) -> Json<ProductCollectionResponse> {
        let products = self
            .search_use_case
            .execute(SearchProductsParams {
                term: term.0.unwrap_or_default(),
            })
            .await;
        Json(products.into())
    }

    /// List products with stock at or below a threshold
    ///
    /// The threshold is inclusive and defaults to 10.
    #[oai(
        path = "/products/low-stock",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn low_stock_products(
        &self,
        threshold: Query<Option<u32>>,
    ) -> Json<ProductCollectionResponse> {
        let params = match threshold.0 {
            Some(threshold) => LowStockParams { threshold },
            None => LowStockParams::default(),
        };
        let products = self.low_stock_use_case.execute(params).await;
        Json(products.into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateStockResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
