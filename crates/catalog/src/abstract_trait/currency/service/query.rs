use crate::domain::{
    requests::currency::ConvertAmountQuery,
    response::{ApiResponse, ConversionResponse, CurrencyResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCurrencyQueryService = Arc<dyn CurrencyQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CurrencyQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CurrencyResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CurrencyResponse>, ServiceError>;
    async fn convert_amount(
        &self,
        req: &ConvertAmountQuery,
    ) -> Result<ApiResponse<ConversionResponse>, ServiceError>;
}
