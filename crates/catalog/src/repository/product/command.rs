use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{NewProduct, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, description, price, currency_id, tax_cost, manufacturing_cost)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, price, currency_id, tax_cost, manufacturing_cost,
                      deleted_at, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(product.description.as_deref())
        .bind(product.price)
        .bind(product.currency_id)
        .bind(product.tax_cost)
        .bind(product.manufacturing_cost)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                action = "create",
                payload = ?product,
                "❌ Failed to create product {}: {err:?}",
                product.name
            );
            RepositoryError::from_write(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            action = "create",
            product_id = result.id,
            "✅ Created product ID {} ({})",
            result.id,
            result.name
        );
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                price = COALESCE($5, price),
                currency_id = COALESCE($6, currency_id),
                tax_cost = COALESCE($7, tax_cost),
                manufacturing_cost = COALESCE($8, manufacturing_cost),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, description, price, currency_id, tax_cost, manufacturing_cost,
                      deleted_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(req.name())
        .bind(req.description.is_some())
        .bind(req.description.as_ref().and_then(|d| d.as_deref()))
        .bind(req.price())
        .bind(req.currency_id())
        .bind(req.tax_cost())
        .bind(req.manufacturing_cost())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                action = "update",
                product_id = id,
                payload = ?req,
                "❌ Failed to update product ID {id}: {err:?}"
            );
            RepositoryError::from_write(err)
        })?
        .ok_or(RepositoryError::EntityNotFound {
            entity: "Product",
            id,
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(action = "update", product_id = id, "🔄 Updated product ID {id}");
        Ok(result)
    }

    async fn trash_product(&self, id: i64) -> Result<ProductModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET deleted_at = CURRENT_TIMESTAMP,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, description, price, currency_id, tax_cost, manufacturing_cost,
                      deleted_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!(action = "delete", product_id = id, "❌ Failed to trash product ID {id}: {err:?}");
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::EntityNotFound {
            entity: "Product",
            id,
        })?;

        let removed = sqlx::query("DELETE FROM product_prices WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    action = "delete",
                    product_id = id,
                    "❌ Failed to remove prices of product ID {id}: {err:?}"
                );
                RepositoryError::from(err)
            })?
            .rows_affected();

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            action = "delete",
            product_id = id,
            prices_removed = removed,
            "🗑️ Trashed product ID {id}"
        );
        Ok(result)
    }
}
