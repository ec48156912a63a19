use crate::{
    abstract_trait::currency::{
        repository::DynCurrencyCommandRepository, service::CurrencyCommandServiceTrait,
    },
    domain::{
        requests::currency::{CreateCurrencyRequest, UpdateCurrencyRequest},
        response::{ApiResponse, CurrencyResponse},
    },
    service::{from_repository, validate_request},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracer},
};
use tracing::info;

#[derive(Clone)]
pub struct CurrencyCommandService {
    command: DynCurrencyCommandRepository,
    tracer: OperationTracer,
}

impl CurrencyCommandService {
    pub fn new(command: DynCurrencyCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "currency_command_service");

        Self {
            command,
            tracer: OperationTracer::new("currency-command-service", metrics),
        }
    }
}

fn symbol_taken(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::Conflict(_) => {
            ServiceError::field("symbol", "The symbol has already been taken.")
        }
        other => from_repository(other),
    }
}

#[async_trait]
impl CurrencyCommandServiceTrait for CurrencyCommandService {
    async fn create_currency(
        &self,
        req: &CreateCurrencyRequest,
    ) -> Result<ApiResponse<CurrencyResponse>, ServiceError> {
        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "currency_create",
            vec![
                KeyValue::new("component", "currency"),
                KeyValue::new("operation", "create"),
                KeyValue::new("currency.symbol", req.symbol.clone()),
            ],
        );

        let result = match validate_request(req) {
            Ok(()) => self.command.create_currency(req).await.map_err(symbol_taken),
            Err(e) => Err(e),
        };

        match result {
            Ok(currency) => {
                info!("✅ Currency {} created", currency.formatted_name());
                self.tracer.success(&tracing_ctx, method, "Currency created");
                Ok(ApiResponse::ok(
                    "Currency created successfully",
                    currency.into(),
                ))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to create currency: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn update_currency(
        &self,
        id: i64,
        req: &UpdateCurrencyRequest,
    ) -> Result<ApiResponse<CurrencyResponse>, ServiceError> {
        let method = Method::Put;
        let tracing_ctx = self.tracer.start(
            "currency_update",
            vec![
                KeyValue::new("component", "currency"),
                KeyValue::new("operation", "update"),
                KeyValue::new("currency.id", id),
            ],
        );

        let result = match validate_request(req) {
            Ok(()) => self
                .command
                .update_currency(id, req)
                .await
                .map_err(symbol_taken),
            Err(e) => Err(e),
        };

        match result {
            Ok(currency) => {
                info!("🔄 Currency {} updated", currency.formatted_name());
                self.tracer.success(&tracing_ctx, method, "Currency updated");
                Ok(ApiResponse::ok(
                    "Currency updated successfully",
                    currency.into(),
                ))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to update currency {id}: {e}"),
                );
                Err(e)
            }
        }
    }
}
