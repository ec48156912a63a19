use crate::{
    abstract_trait::{
        currency::repository::DynCurrencyQueryRepository,
        product::repository::DynProductQueryRepository,
        product_price::{
            repository::{DynProductPriceCommandRepository, DynProductPriceQueryRepository},
            service::ProductPriceServiceTrait,
        },
    },
    domain::{
        requests::product_price::CreateProductPriceRequest,
        response::{ApiResponse, ConvertedPriceResponse, ProductPriceResponse, decimal_to_f64},
    },
    model::product::Product as ProductModel,
    service::{conversion::convert, from_repository, relations::ProductRelations, validate_request},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};
use tracing::info;

#[derive(Clone)]
pub struct ProductPriceServiceDeps {
    pub product_query: DynProductQueryRepository,
    pub currency_query: DynCurrencyQueryRepository,
    pub price_query: DynProductPriceQueryRepository,
    pub price_command: DynProductPriceCommandRepository,
    pub relations: ProductRelations,
}

#[derive(Clone)]
pub struct ProductPriceService {
    deps: ProductPriceServiceDeps,
    tracer: OperationTracer,
}

impl ProductPriceService {
    pub fn new(deps: ProductPriceServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_price_service");

        Self {
            deps,
            tracer: OperationTracer::new("product-price-service", metrics),
        }
    }

    async fn find_product(&self, product_id: i64) -> Result<ProductModel, ServiceError> {
        self.deps
            .product_query
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Product not found with ID: {product_id}"))
            })
    }

    async fn find_by_product_inner(
        &self,
        product_id: i64,
    ) -> Result<Vec<ProductPriceResponse>, ServiceError> {
        self.find_product(product_id).await?;

        let prices = self.deps.price_query.find_by_product(product_id).await?;
        let prices = self.deps.relations.attach_currencies(prices).await?;

        Ok(prices.into_iter().map(ProductPriceResponse::from).collect())
    }

    async fn upsert_inner(
        &self,
        product_id: i64,
        req: &CreateProductPriceRequest,
    ) -> Result<ProductPriceResponse, ServiceError> {
        validate_request(req)?;

        let (Some(currency_id), Some(price)) = (req.currency_id, req.price) else {
            return Err(ServiceError::Internal(
                "price payload passed validation with missing fields".into(),
            ));
        };

        let row = self
            .deps
            .price_command
            .upsert_price(product_id, currency_id, price)
            .await
            .map_err(from_repository)?;

        let mut loaded = self.deps.relations.attach_currencies(vec![row]).await?;
        loaded
            .pop()
            .map(ProductPriceResponse::from)
            .ok_or_else(|| ServiceError::Internal("saved price was not loaded".into()))
    }

    async fn converted_inner(
        &self,
        product_id: i64,
    ) -> Result<Vec<ConvertedPriceResponse>, ServiceError> {
        let product = self.find_product(product_id).await?;
        let currencies = self.deps.currency_query.find_all().await?;

        let base = currencies
            .iter()
            .find(|c| c.id == product.currency_id)
            .ok_or_else(|| {
                ServiceError::Internal(format!(
                    "Currency not found with ID: {}",
                    product.currency_id
                ))
            })?;
        let base_rate = base.exchange_rate;

        currencies
            .iter()
            .map(|currency| -> Result<ConvertedPriceResponse, ServiceError> {
                let price = convert(product.price, base_rate, currency.exchange_rate)?;
                Ok(ConvertedPriceResponse {
                    currency_id: currency.id,
                    currency_name: currency.name.clone(),
                    currency_symbol: currency.symbol.clone(),
                    price: decimal_to_f64(price),
                })
            })
            .collect()
    }
}

#[async_trait]
impl ProductPriceServiceTrait for ProductPriceService {
    async fn find_by_product(
        &self,
        product_id: i64,
    ) -> Result<ApiResponse<Vec<ProductPriceResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_price_find_by_product",
            vec![
                KeyValue::new("component", "product_price"),
                KeyValue::new("operation", "find_by_product"),
                KeyValue::new("product.id", product_id),
            ],
        );

        match self.find_by_product_inner(product_id).await {
            Ok(prices) => {
                info!("✅ Retrieved {} prices for product ID {product_id}", prices.len());
                self.tracer
                    .success(&tracing_ctx, method, "Product prices retrieved");
                Ok(ApiResponse::ok("Prices retrieved successfully", prices))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to retrieve prices of product {product_id}: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn upsert_price(
        &self,
        product_id: i64,
        req: &CreateProductPriceRequest,
    ) -> Result<ApiResponse<ProductPriceResponse>, ServiceError> {
        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "product_price_upsert",
            vec![
                KeyValue::new("component", "product_price"),
                KeyValue::new("operation", "upsert"),
                KeyValue::new("product.id", product_id),
                KeyValue::new("currency.id", req.currency_id.unwrap_or_default()),
            ],
        );

        match self.upsert_inner(product_id, req).await {
            Ok(price) => {
                self.tracer.success(&tracing_ctx, method, "Product price saved");
                Ok(ApiResponse::ok("Price created/updated successfully", price))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to save price of product {product_id}: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn prices_in_all_currencies(
        &self,
        product_id: i64,
    ) -> Result<ApiResponse<Vec<ConvertedPriceResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_price_convert_all",
            vec![
                KeyValue::new("component", "product_price"),
                KeyValue::new("operation", "prices_in_all_currencies"),
                KeyValue::new("product.id", product_id),
            ],
        );

        match self.converted_inner(product_id).await {
            Ok(prices) => {
                self.tracer
                    .success(&tracing_ctx, method, "Converted prices calculated");
                Ok(ApiResponse::ok("Converted prices retrieved successfully", prices))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to convert prices of product {product_id}: {e}"),
                );
                Err(e)
            }
        }
    }
}
