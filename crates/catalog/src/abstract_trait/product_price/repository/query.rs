use crate::model::product_price::ProductPrice as ProductPriceModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductPriceQueryRepository = Arc<dyn ProductPriceQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductPriceQueryRepositoryTrait {
    /// Overrides of one product, ordered by currency id.
    async fn find_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductPriceModel>, RepositoryError>;
    async fn find_by_products(
        &self,
        product_ids: &[i64],
    ) -> Result<Vec<ProductPriceModel>, RepositoryError>;
}
