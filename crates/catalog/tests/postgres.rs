//! Repository tests against a real database. Each test gets a fresh database
//! with the migrations applied; run them with `DATABASE_URL` pointing at a
//! Postgres server and `cargo test -- --ignored`.

use catalog::{
    abstract_trait::{
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        product_price::repository::{
            ProductPriceCommandRepositoryTrait, ProductPriceQueryRepositoryTrait,
        },
    },
    domain::requests::product::{FindAllProducts, NewProduct, UpdateProductRequest},
    repository::{
        product::{ProductCommandRepository, ProductQueryRepository},
        product_price::{ProductPriceCommandRepository, ProductPriceQueryRepository},
    },
};
use rust_decimal_macros::dec;
use shared::errors::RepositoryError;
use sqlx::PgPool;

const USD: i64 = 1;
const EUR: i64 = 2;

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: Some("Seeded in a test".to_string()),
        price: dec!(100.00),
        currency_id: USD,
        tax_cost: dec!(10.00),
        manufacturing_cost: dec!(5.00),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore] // Requires a Postgres DATABASE_URL
async fn upsert_keeps_one_row_per_currency(pool: PgPool) {
    let products = ProductCommandRepository::new(pool.clone());
    let prices = ProductPriceCommandRepository::new(pool.clone());
    let product = products.create_product(&new_product("Widget")).await.unwrap();

    let first = prices.upsert_price(product.id, EUR, dec!(90.00)).await.unwrap();
    let second = prices.upsert_price(product.id, EUR, dec!(95.50)).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.price, dec!(95.50));

    let rows = ProductPriceQueryRepository::new(pool)
        .find_by_product(product.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price, dec!(95.50));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore] // Requires a Postgres DATABASE_URL
async fn upsert_for_missing_currency_writes_nothing(pool: PgPool) {
    let products = ProductCommandRepository::new(pool.clone());
    let prices = ProductPriceCommandRepository::new(pool.clone());
    let product = products.create_product(&new_product("Widget")).await.unwrap();

    let err = prices.upsert_price(product.id, 999, dec!(1.00)).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::EntityNotFound {
            entity: "Currency",
            id: 999
        }
    ));

    let rows = ProductPriceQueryRepository::new(pool)
        .find_by_product(product.id)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore] // Requires a Postgres DATABASE_URL
async fn update_clears_description_and_leaves_other_columns(pool: PgPool) {
    let products = ProductCommandRepository::new(pool.clone());
    let product = products.create_product(&new_product("Widget")).await.unwrap();

    let request = UpdateProductRequest {
        description: Some(None),
        tax_cost: Some(Some(dec!(12.00))),
        ..Default::default()
    };
    let updated = products.update_product(product.id, &request).await.unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.tax_cost, dec!(12.00));
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.price, dec!(100.00));
    assert!(updated.updated_at >= product.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore] // Requires a Postgres DATABASE_URL
async fn name_filter_treats_wildcards_literally(pool: PgPool) {
    let products = ProductCommandRepository::new(pool.clone());
    for name in ["100% Cotton", "1000 Cotton", "snake_case mug", "snakeXcase mug"] {
        products.create_product(&new_product(name)).await.unwrap();
    }
    let query = ProductQueryRepository::new(pool);

    let (rows, total) = query
        .find_all(&FindAllProducts {
            name: Some("100%".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].name, "100% Cotton");

    let (rows, total) = query
        .find_all(&FindAllProducts {
            name: Some("E_C".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].name, "snake_case mug");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore] // Requires a Postgres DATABASE_URL
async fn trash_hides_product_and_drops_its_prices(pool: PgPool) {
    let products = ProductCommandRepository::new(pool.clone());
    let product = products.create_product(&new_product("Widget")).await.unwrap();
    ProductPriceCommandRepository::new(pool.clone())
        .upsert_price(product.id, EUR, dec!(92.00))
        .await
        .unwrap();

    let trashed = products.trash_product(product.id).await.unwrap();
    assert!(trashed.deleted_at.is_some());

    let query = ProductQueryRepository::new(pool.clone());
    assert!(query.find_by_id(product.id).await.unwrap().is_none());
    assert!(query.find_by_id_with_trashed(product.id).await.unwrap().is_some());

    let rows = ProductPriceQueryRepository::new(pool)
        .find_by_product(product.id)
        .await
        .unwrap();
    assert!(rows.is_empty());

    assert!(matches!(
        products.trash_product(product.id).await,
        Err(RepositoryError::EntityNotFound { .. })
    ));
}
