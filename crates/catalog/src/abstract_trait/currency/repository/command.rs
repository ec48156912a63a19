use crate::{
    domain::requests::currency::{CreateCurrencyRequest, UpdateCurrencyRequest},
    model::currency::Currency as CurrencyModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCurrencyCommandRepository = Arc<dyn CurrencyCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CurrencyCommandRepositoryTrait {
    async fn create_currency(
        &self,
        req: &CreateCurrencyRequest,
    ) -> Result<CurrencyModel, RepositoryError>;
    async fn update_currency(
        &self,
        id: i64,
        req: &UpdateCurrencyRequest,
    ) -> Result<CurrencyModel, RepositoryError>;
}
