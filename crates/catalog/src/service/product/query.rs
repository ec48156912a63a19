use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{ApiResponse, ApiResponsePagination, PaginationMeta, ProductResponse},
    },
    service::{relations::ProductRelations, validate_request},
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
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    relations: ProductRelations,
    tracer: OperationTracer,
}

impl ProductQueryService {
    pub fn new(
        query: DynProductQueryRepository,
        relations: ProductRelations,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service");

        Self {
            query,
            relations,
            tracer: OperationTracer::new("product-query-service", metrics),
        }
    }

    async fn find_all_inner(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        validate_request(req)?;

        let (products, total) = self.query.find_all(req).await?;
        let products = self.relations.load_many(products).await?;

        info!("✅ Retrieved {} products (total {total})", products.len());

        let data = products.into_iter().map(ProductResponse::from).collect();
        let meta = PaginationMeta::new(total, req.per_page, req.page);

        Ok(ApiResponsePagination::ok(
            "Products retrieved successfully",
            data,
            meta,
        ))
    }

    async fn find_by_id_inner(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product not found with ID: {id}")))?;

        Ok(self.relations.load_one(product).await?.into())
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}, Sort: {} {}",
            req.page, req.per_page, req.sort_by, req.sort_order
        );

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", req.page),
                KeyValue::new("per_page", req.per_page),
                KeyValue::new("name", req.name_filter().unwrap_or_default().to_string()),
            ],
        );

        match self.find_all_inner(req).await {
            Ok(response) => {
                self.tracer
                    .success(&tracing_ctx, method, "Products retrieved");
                Ok(response)
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to retrieve products: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id),
            ],
        );

        match self.find_by_id_inner(id).await {
            Ok(product) => {
                self.tracer
                    .success(&tracing_ctx, method, "Product retrieved");
                Ok(ApiResponse::ok("Product retrieved successfully", product))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to retrieve product {id}: {e}"),
                );
                Err(e)
            }
        }
    }
}
