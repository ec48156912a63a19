use crate::model::currency::Currency as CurrencyModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCurrencyQueryRepository = Arc<dyn CurrencyQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CurrencyQueryRepositoryTrait {
    /// Every currency, ordered by name.
    async fn find_all(&self) -> Result<Vec<CurrencyModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<CurrencyModel>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<CurrencyModel>, RepositoryError>;
}
