use crate::{
    abstract_trait::product_price::repository::ProductPriceCommandRepositoryTrait,
    model::product_price::ProductPrice as ProductPriceModel,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductPriceCommandRepository {
    db: ConnectionPool,
}

impl ProductPriceCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn ensure_exists(
        tx: &mut Transaction<'_, Postgres>,
        sql: &str,
        entity: &'static str,
        id: i64,
    ) -> Result<(), RepositoryError> {
        let exists: bool = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
            .map_err(RepositoryError::from)?;

        if exists {
            Ok(())
        } else {
            Err(RepositoryError::EntityNotFound { entity, id })
        }
    }

    async fn upsert_in(
        tx: &mut Transaction<'_, Postgres>,
        product_id: i64,
        currency_id: i64,
        price: Decimal,
    ) -> Result<ProductPriceModel, RepositoryError> {
        Self::ensure_exists(
            tx,
            "SELECT EXISTS (SELECT 1 FROM products WHERE id = $1 AND deleted_at IS NULL)",
            "Product",
            product_id,
        )
        .await?;

        Self::ensure_exists(
            tx,
            "SELECT EXISTS (SELECT 1 FROM currencies WHERE id = $1)",
            "Currency",
            currency_id,
        )
        .await?;

        sqlx::query_as::<_, ProductPriceModel>(
            r#"
            INSERT INTO product_prices (product_id, currency_id, price)
            VALUES ($1, $2, $3)
            ON CONFLICT (product_id, currency_id)
            DO UPDATE SET price = EXCLUDED.price,
                          updated_at = CURRENT_TIMESTAMP
            RETURNING id, product_id, currency_id, price, created_at, updated_at
            "#,
        )
        .bind(product_id)
        .bind(currency_id)
        .bind(price)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from_write)
    }
}

#[async_trait]
impl ProductPriceCommandRepositoryTrait for ProductPriceCommandRepository {
    async fn upsert_price(
        &self,
        product_id: i64,
        currency_id: i64,
        price: Decimal,
    ) -> Result<ProductPriceModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Dropping `tx` on the error path rolls the checks and the write back together.
        let row = Self::upsert_in(&mut tx, product_id, currency_id, price)
            .await
            .map_err(|err| {
                error!(
                    product_id,
                    currency_id,
                    price = %price,
                    "❌ Failed to save product price: {err}"
                );
                err
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            product_id,
            currency_id,
            price = %row.price,
            "💾 Saved price ID {} for product ID {product_id}",
            row.id
        );
        Ok(row)
    }
}
