use crate::{
    abstract_trait::currency::repository::CurrencyQueryRepositoryTrait,
    model::currency::Currency as CurrencyModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CurrencyQueryRepository {
    db: ConnectionPool,
}

impl CurrencyQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CurrencyQueryRepositoryTrait for CurrencyQueryRepository {
    async fn find_all(&self) -> Result<Vec<CurrencyModel>, RepositoryError> {
        let currencies = sqlx::query_as::<_, CurrencyModel>(
            r#"
            SELECT id, name, symbol, exchange_rate, created_at, updated_at
            FROM currencies
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch currencies: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Fetched {} currencies", currencies.len());
        Ok(currencies)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CurrencyModel>, RepositoryError> {
        sqlx::query_as::<_, CurrencyModel>(
            r#"
            SELECT id, name, symbol, exchange_rate, created_at, updated_at
            FROM currencies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch currency ID {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<CurrencyModel>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, CurrencyModel>(
            r#"
            SELECT id, name, symbol, exchange_rate, created_at, updated_at
            FROM currencies
            WHERE id = ANY($1)
            ORDER BY name ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch currencies {ids:?}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
