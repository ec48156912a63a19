use crate::model::product_price::ProductPrice as ProductPriceModel;
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductPriceCommandRepository =
    Arc<dyn ProductPriceCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductPriceCommandRepositoryTrait {
    /// Inserts or overwrites the price for `(product_id, currency_id)`.
    ///
    /// Both ids are checked inside the same transaction as the write; a
    /// missing one yields [`RepositoryError::EntityNotFound`] and nothing is
    /// written.
    async fn upsert_price(
        &self,
        product_id: i64,
        currency_id: i64,
        price: Decimal,
    ) -> Result<ProductPriceModel, RepositoryError>;
}
