use crate::domain::{
    requests::product_price::CreateProductPriceRequest,
    response::{ApiResponse, ConvertedPriceResponse, ProductPriceResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductPriceService = Arc<dyn ProductPriceServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductPriceServiceTrait {
    async fn find_by_product(
        &self,
        product_id: i64,
    ) -> Result<ApiResponse<Vec<ProductPriceResponse>>, ServiceError>;
    async fn upsert_price(
        &self,
        product_id: i64,
        req: &CreateProductPriceRequest,
    ) -> Result<ApiResponse<ProductPriceResponse>, ServiceError>;
    /// The product's base price converted into every known currency.
    async fn prices_in_all_currencies(
        &self,
        product_id: i64,
    ) -> Result<ApiResponse<Vec<ConvertedPriceResponse>>, ServiceError>;
}
