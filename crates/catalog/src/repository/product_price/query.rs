use crate::{
    abstract_trait::product_price::repository::ProductPriceQueryRepositoryTrait,
    model::product_price::ProductPrice as ProductPriceModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct ProductPriceQueryRepository {
    db: ConnectionPool,
}

impl ProductPriceQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductPriceQueryRepositoryTrait for ProductPriceQueryRepository {
    async fn find_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductPriceModel>, RepositoryError> {
        sqlx::query_as::<_, ProductPriceModel>(
            r#"
            SELECT id, product_id, currency_id, price, created_at, updated_at
            FROM product_prices
            WHERE product_id = $1
            ORDER BY currency_id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch prices of product ID {product_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_products(
        &self,
        product_ids: &[i64],
    ) -> Result<Vec<ProductPriceModel>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, ProductPriceModel>(
            r#"
            SELECT id, product_id, currency_id, price, created_at, updated_at
            FROM product_prices
            WHERE product_id = ANY($1)
            ORDER BY product_id ASC, currency_id ASC
            "#,
        )
        .bind(product_ids)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch prices of products {product_ids:?}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
