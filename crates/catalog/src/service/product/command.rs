use crate::{
    abstract_trait::{
        currency::repository::DynCurrencyQueryRepository,
        product::{repository::DynProductCommandRepository, service::ProductCommandServiceTrait},
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{ApiResponse, MessageResponse, ProductResponse},
    },
    service::{from_repository, relations::ProductRelations, validate_request},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracer},
};
use tracing::info;

const INVALID_CURRENCY: &str = "The selected currency_id is invalid.";

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    currency_query: DynCurrencyQueryRepository,
    relations: ProductRelations,
    tracer: OperationTracer,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        currency_query: DynCurrencyQueryRepository,
        relations: ProductRelations,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service");

        Self {
            command,
            currency_query,
            relations,
            tracer: OperationTracer::new("product-command-service", metrics),
        }
    }

    async fn ensure_currency(&self, currency_id: i64) -> Result<(), ServiceError> {
        match self.currency_query.find_by_id(currency_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::field("currency_id", INVALID_CURRENCY)),
        }
    }

    async fn create_inner(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        validate_request(req)?;

        let new_product = req.clone().into_new_product().ok_or_else(|| {
            ServiceError::Internal("product payload passed validation with missing fields".into())
        })?;

        self.ensure_currency(new_product.currency_id).await?;

        let product = self
            .command
            .create_product(&new_product)
            .await
            .map_err(currency_violation)?;

        Ok(self.relations.load_one(product).await?.into())
    }

    async fn update_inner(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        validate_request(req)?;

        if let Some(currency_id) = req.currency_id() {
            self.ensure_currency(currency_id).await?;
        }

        let product = self
            .command
            .update_product(id, req)
            .await
            .map_err(currency_violation)?;

        Ok(self.relations.load_one(product).await?.into())
    }
}

/// A currency removed between the existence check and the write surfaces as a
/// foreign key violation.
fn currency_violation(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::ForeignKey(_) => ServiceError::field("currency_id", INVALID_CURRENCY),
        other => from_repository(other),
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product: {:?}", req.name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "product_create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.name", req.name.clone().unwrap_or_default()),
            ],
        );

        match self.create_inner(req).await {
            Ok(product) => {
                info!(action = "create", product_id = product.id, "✅ Product created");
                self.tracer.success(&tracing_ctx, method, "Product created");
                Ok(ApiResponse::ok("Product created successfully", product))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to create product: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product ID {id}");

        let method = Method::Put;
        let tracing_ctx = self.tracer.start(
            "product_update",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "update"),
                KeyValue::new("product.id", id),
            ],
        );

        match self.update_inner(id, req).await {
            Ok(product) => {
                info!(action = "update", product_id = id, "✅ Product updated");
                self.tracer.success(&tracing_ctx, method, "Product updated");
                Ok(ApiResponse::ok("Product updated successfully", product))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to update product {id}: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn delete_product(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        info!("🗑️ Deleting product ID {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "product_delete",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", id),
            ],
        );

        match self.command.trash_product(id).await {
            Ok(_) => {
                info!(action = "delete", product_id = id, "✅ Product deleted");
                self.tracer.success(&tracing_ctx, method, "Product deleted");
                Ok(MessageResponse::ok("Product deleted successfully"))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to delete product {id}: {e}"),
                );
                Err(from_repository(e))
            }
        }
    }
}
