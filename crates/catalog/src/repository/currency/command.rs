use crate::{
    abstract_trait::currency::repository::CurrencyCommandRepositoryTrait,
    domain::requests::currency::{CreateCurrencyRequest, UpdateCurrencyRequest},
    model::currency::Currency as CurrencyModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CurrencyCommandRepository {
    db: ConnectionPool,
}

impl CurrencyCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CurrencyCommandRepositoryTrait for CurrencyCommandRepository {
    async fn create_currency(
        &self,
        req: &CreateCurrencyRequest,
    ) -> Result<CurrencyModel, RepositoryError> {
        let currency = sqlx::query_as::<_, CurrencyModel>(
            r#"
            INSERT INTO currencies (name, symbol, exchange_rate)
            VALUES ($1, $2, $3)
            RETURNING id, name, symbol, exchange_rate, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.symbol)
        .bind(req.exchange_rate)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create currency {}: {e:?}", req.symbol);
            RepositoryError::from_write(e)
        })?;

        info!("✅ Created currency ID {} ({})", currency.id, currency.symbol);
        Ok(currency)
    }

    async fn update_currency(
        &self,
        id: i64,
        req: &UpdateCurrencyRequest,
    ) -> Result<CurrencyModel, RepositoryError> {
        let currency = sqlx::query_as::<_, CurrencyModel>(
            r#"
            UPDATE currencies
            SET name = COALESCE($2, name),
                symbol = COALESCE($3, symbol),
                exchange_rate = COALESCE($4, exchange_rate),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, name, symbol, exchange_rate, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.symbol.as_deref())
        .bind(req.exchange_rate)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update currency ID {id}: {e:?}");
            RepositoryError::from_write(e)
        })?
        .ok_or(RepositoryError::EntityNotFound {
            entity: "Currency",
            id,
        })?;

        info!("🔄 Updated currency ID {}", currency.id);
        Ok(currency)
    }
}
