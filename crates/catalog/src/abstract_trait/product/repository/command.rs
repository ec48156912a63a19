use crate::{
    domain::requests::product::{NewProduct, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

/// Each method runs in its own transaction.
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// Marks the product deleted and removes its price overrides.
    async fn trash_product(&self, id: i64) -> Result<ProductModel, RepositoryError>;
}
