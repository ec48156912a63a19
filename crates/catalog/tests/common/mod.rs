#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use catalog::{
    abstract_trait::{
        currency::repository::{CurrencyCommandRepositoryTrait, CurrencyQueryRepositoryTrait},
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        product_price::repository::{
            ProductPriceCommandRepositoryTrait, ProductPriceQueryRepositoryTrait,
        },
    },
    di::Repositories,
    domain::requests::{
        currency::{CreateCurrencyRequest, UpdateCurrencyRequest},
        product::{FindAllProducts, NewProduct, ProductSortColumn, SortOrder, UpdateProductRequest},
    },
    handler::AppRouter,
    model::{currency::Currency, product::Product, product_price::ProductPrice},
    state::AppState,
};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use shared::{
    abstract_trait::JwtServiceTrait, config::JwtConfig, errors::RepositoryError,
};
use std::{cmp::Ordering, sync::Arc, sync::Mutex};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "catalog-test-secret";

pub const USD: i64 = 1;
pub const EUR: i64 = 2;
pub const GTQ: i64 = 3;

#[derive(Default)]
struct Tables {
    currencies: Vec<Currency>,
    products: Vec<Product>,
    prices: Vec<ProductPrice>,
    next_currency_id: i64,
    next_product_id: i64,
    next_price_id: i64,
}

/// Keeps every table behind one lock so each write is atomic, like the
/// transactions of the Postgres repositories.
#[derive(Default)]
pub struct InMemoryCatalog {
    tables: Mutex<Tables>,
}

impl InMemoryCatalog {
    pub fn seeded() -> Arc<Self> {
        let store = Arc::new(Self::default());
        {
            let mut t = store.tables.lock().unwrap();
            for (name, symbol, rate) in [
                ("US Dollar", "USD", dec!(1.000000)),
                ("Euro", "EUR", dec!(0.920000)),
                ("Guatemalan Quetzal", "GTQ", dec!(7.850000)),
                ("Mexican Peso", "MXN", dec!(17.250000)),
                ("British Pound", "GBP", dec!(0.790000)),
            ] {
                t.next_currency_id += 1;
                let now = Utc::now();
                let currency = Currency {
                    id: t.next_currency_id,
                    name: name.into(),
                    symbol: symbol.into(),
                    exchange_rate: rate,
                    created_at: now,
                    updated_at: now,
                };
                t.currencies.push(currency);
            }
        }
        store
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            currency_query: self.clone(),
            currency_command: self.clone(),
            product_query: self.clone(),
            product_command: self.clone(),
            price_query: self.clone(),
            price_command: self.clone(),
        }
    }

    pub fn price_rows(&self, product_id: i64) -> Vec<ProductPrice> {
        let t = self.tables.lock().unwrap();
        t.prices
            .iter()
            .filter(|p| p.product_id == product_id)
            .cloned()
            .collect()
    }
}

fn compare(a: &Product, b: &Product, column: ProductSortColumn) -> Ordering {
    match column {
        ProductSortColumn::Id => a.id.cmp(&b.id),
        ProductSortColumn::Name => a.name.cmp(&b.name),
        ProductSortColumn::Price => a.price.cmp(&b.price),
        ProductSortColumn::TaxCost => a.tax_cost.cmp(&b.tax_cost),
        ProductSortColumn::ManufacturingCost => a.manufacturing_cost.cmp(&b.manufacturing_cost),
        ProductSortColumn::CurrencyId => a.currency_id.cmp(&b.currency_id),
        ProductSortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        ProductSortColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

#[async_trait]
impl CurrencyQueryRepositoryTrait for InMemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Currency>, RepositoryError> {
        let mut currencies = self.tables.lock().unwrap().currencies.clone();
        currencies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(currencies)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>, RepositoryError> {
        let t = self.tables.lock().unwrap();
        Ok(t.currencies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Currency>, RepositoryError> {
        let t = self.tables.lock().unwrap();
        Ok(t.currencies
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CurrencyCommandRepositoryTrait for InMemoryCatalog {
    async fn create_currency(
        &self,
        req: &CreateCurrencyRequest,
    ) -> Result<Currency, RepositoryError> {
        let mut t = self.tables.lock().unwrap();
        if t.currencies.iter().any(|c| c.symbol == req.symbol) {
            return Err(RepositoryError::Conflict("symbol".into()));
        }
        t.next_currency_id += 1;
        let now = Utc::now();
        let currency = Currency {
            id: t.next_currency_id,
            name: req.name.clone(),
            symbol: req.symbol.clone(),
            exchange_rate: req.exchange_rate,
            created_at: now,
            updated_at: now,
        };
        t.currencies.push(currency.clone());
        Ok(currency)
    }

    async fn update_currency(
        &self,
        id: i64,
        req: &UpdateCurrencyRequest,
    ) -> Result<Currency, RepositoryError> {
        let mut t = self.tables.lock().unwrap();
        let currency = t
            .currencies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::EntityNotFound {
                entity: "Currency",
                id,
            })?;
        if let Some(name) = &req.name {
            currency.name = name.clone();
        }
        if let Some(symbol) = &req.symbol {
            currency.symbol = symbol.clone();
        }
        if let Some(rate) = req.exchange_rate {
            currency.exchange_rate = rate;
        }
        currency.updated_at = Utc::now();
        Ok(currency.clone())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryCatalog {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let t = self.tables.lock().unwrap();
        let name = req.name_filter().map(str::to_lowercase);

        let mut rows: Vec<Product> = t
            .products
            .iter()
            .filter(|p| p.deleted_at.is_none())
            .filter(|p| name.as_ref().is_none_or(|n| p.name.to_lowercase().contains(n)))
            .filter(|p| req.currency_id.is_none_or(|id| p.currency_id == id))
            .filter(|p| req.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| req.max_price.is_none_or(|max| p.price <= max))
            .cloned()
            .collect();

        let column = req.sort_column();
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, column).then(a.id.cmp(&b.id));
            match req.sort_direction() {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = rows.len() as i64;
        let page = rows
            .into_iter()
            .skip(req.offset() as usize)
            .take(req.per_page as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let t = self.tables.lock().unwrap();
        Ok(t.products
            .iter()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_id_with_trashed(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let t = self.tables.lock().unwrap();
        Ok(t.products.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryCatalog {
    async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut t = self.tables.lock().unwrap();
        if !t.currencies.iter().any(|c| c.id == product.currency_id) {
            return Err(RepositoryError::ForeignKey("products_currency_id_fkey".into()));
        }
        t.next_product_id += 1;
        let now = Utc::now();
        let row = Product {
            id: t.next_product_id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            currency_id: product.currency_id,
            tax_cost: product.tax_cost,
            manufacturing_cost: product.manufacturing_cost,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        t.products.push(row.clone());
        Ok(row)
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut t = self.tables.lock().unwrap();
        let product = t
            .products
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or(RepositoryError::EntityNotFound {
                entity: "Product",
                id,
            })?;

        if let Some(name) = req.name() {
            product.name = name.to_string();
        }
        if let Some(description) = &req.description {
            product.description = description.clone();
        }
        if let Some(price) = req.price() {
            product.price = price;
        }
        if let Some(currency_id) = req.currency_id() {
            product.currency_id = currency_id;
        }
        if let Some(tax_cost) = req.tax_cost() {
            product.tax_cost = tax_cost;
        }
        if let Some(manufacturing_cost) = req.manufacturing_cost() {
            product.manufacturing_cost = manufacturing_cost;
        }
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn trash_product(&self, id: i64) -> Result<Product, RepositoryError> {
        let mut t = self.tables.lock().unwrap();
        let product = t
            .products
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or(RepositoryError::EntityNotFound {
                entity: "Product",
                id,
            })?;
        let now = Utc::now();
        product.deleted_at = Some(now);
        product.updated_at = now;
        let trashed = product.clone();

        t.prices.retain(|p| p.product_id != id);
        Ok(trashed)
    }
}

#[async_trait]
impl ProductPriceQueryRepositoryTrait for InMemoryCatalog {
    async fn find_by_product(&self, product_id: i64) -> Result<Vec<ProductPrice>, RepositoryError> {
        let mut prices = self.price_rows(product_id);
        prices.sort_by_key(|p| p.currency_id);
        Ok(prices)
    }

    async fn find_by_products(
        &self,
        product_ids: &[i64],
    ) -> Result<Vec<ProductPrice>, RepositoryError> {
        let t = self.tables.lock().unwrap();
        let mut prices: Vec<ProductPrice> = t
            .prices
            .iter()
            .filter(|p| product_ids.contains(&p.product_id))
            .cloned()
            .collect();
        prices.sort_by_key(|p| (p.product_id, p.currency_id));
        Ok(prices)
    }
}

#[async_trait]
impl ProductPriceCommandRepositoryTrait for InMemoryCatalog {
    async fn upsert_price(
        &self,
        product_id: i64,
        currency_id: i64,
        price: Decimal,
    ) -> Result<ProductPrice, RepositoryError> {
        let mut t = self.tables.lock().unwrap();
        if !t
            .products
            .iter()
            .any(|p| p.id == product_id && p.deleted_at.is_none())
        {
            return Err(RepositoryError::EntityNotFound {
                entity: "Product",
                id: product_id,
            });
        }
        if !t.currencies.iter().any(|c| c.id == currency_id) {
            return Err(RepositoryError::EntityNotFound {
                entity: "Currency",
                id: currency_id,
            });
        }

        let now = Utc::now();
        if let Some(existing) = t
            .prices
            .iter_mut()
            .find(|p| p.product_id == product_id && p.currency_id == currency_id)
        {
            existing.price = price;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        t.next_price_id += 1;
        let row = ProductPrice {
            id: t.next_price_id,
            product_id,
            currency_id,
            price,
            created_at: now,
            updated_at: now,
        };
        t.prices.push(row.clone());
        Ok(row)
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryCatalog>,
    pub state: AppState,
    token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let store = InMemoryCatalog::seeded();
        let state = AppState::with_repositories(store.repositories(), JWT_SECRET);
        let router = AppRouter::build(state.clone());
        let token = JwtConfig::new(JWT_SECRET)
            .generate_token(1, "access")
            .expect("token");

        Self {
            router,
            store,
            state,
            token,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token));
        self.send(builder, body).await
    }

    pub async fn request_without_token(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        self.send(builder, None).await
    }

    async fn send(
        &self,
        builder: axum::http::request::Builder,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn create_product(&self, body: Value) -> Value {
        let (status, json) = self.request(Method::POST, "/api/v1/products", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
        json["data"].clone()
    }
}

pub fn widget() -> Value {
    serde_json::json!({
        "name": "Widget",
        "description": "A plain widget",
        "price": 100.00,
        "currency_id": USD,
        "tax_cost": 10.00,
        "manufacturing_cost": 5.00
    })
}
