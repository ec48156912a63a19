use crate::domain::{
    requests::currency::{CreateCurrencyRequest, UpdateCurrencyRequest},
    response::{ApiResponse, CurrencyResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCurrencyCommandService = Arc<dyn CurrencyCommandServiceTrait + Send + Sync>;

/// Currency maintenance. Not routed; used by seeding tools and tests.
#[async_trait]
pub trait CurrencyCommandServiceTrait {
    async fn create_currency(
        &self,
        req: &CreateCurrencyRequest,
    ) -> Result<ApiResponse<CurrencyResponse>, ServiceError>;
    async fn update_currency(
        &self,
        id: i64,
        req: &UpdateCurrencyRequest,
    ) -> Result<ApiResponse<CurrencyResponse>, ServiceError>;
}
