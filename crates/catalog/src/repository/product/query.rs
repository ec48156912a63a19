use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::product::FindAllProducts, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Escapes `%`, `_` and the escape character itself for use inside ILIKE.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, req: &FindAllProducts) {
    builder.push(" WHERE deleted_at IS NULL");

    if let Some(name) = req.name_filter() {
        builder.push(" AND name ILIKE ").push_bind(like_pattern(name));
    }
    if let Some(currency_id) = req.currency_id {
        builder.push(" AND currency_id = ").push_bind(currency_id);
    }
    if let Some(min_price) = req.min_price {
        builder.push(" AND price >= ").push_bind(min_price);
    }
    if let Some(max_price) = req.max_price {
        builder.push(" AND price <= ").push_bind(max_price);
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching products | name: {:?}, currency: {:?}, price: {:?}..{:?}",
            req.name_filter(),
            req.currency_id,
            req.min_price,
            req.max_price
        );

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filters(&mut count, req);

        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {e:?}");
                RepositoryError::from(e)
            })?;

        let mut select = QueryBuilder::<Postgres>::new(
            "SELECT id, name, description, price, currency_id, tax_cost, manufacturing_cost, \
             deleted_at, created_at, updated_at FROM products",
        );
        push_filters(&mut select, req);

        // Column and direction come from closed enums, never from raw input.
        let direction = req.sort_direction().keyword();
        select
            .push(" ORDER BY ")
            .push(req.sort_column().column())
            .push(" ")
            .push(direction)
            .push(", id ")
            .push(direction)
            .push(" LIMIT ")
            .push_bind(req.per_page)
            .push(" OFFSET ")
            .push_bind(req.offset());

        let products = select
            .build_query_as::<ProductModel>()
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("✅ Fetched {} of {total} products", products.len());
        Ok((products, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, currency_id, tax_cost, manufacturing_cost,
                   deleted_at, created_at, updated_at
            FROM products
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product ID {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id_with_trashed(
        &self,
        id: i64,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, currency_id, tax_cost, manufacturing_cost,
                   deleted_at, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product ID {id} (with trashed): {e:?}");
            RepositoryError::from(e)
        })
    }
}
