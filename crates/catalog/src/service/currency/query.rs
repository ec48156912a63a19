use crate::{
    abstract_trait::currency::{
        repository::DynCurrencyQueryRepository, service::CurrencyQueryServiceTrait,
    },
    domain::{
        requests::currency::ConvertAmountQuery,
        response::{ApiResponse, ConversionResponse, CurrencyResponse},
    },
    model::currency::Currency as CurrencyModel,
    service::{conversion::convert, validate_request},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct CurrencyQueryService {
    query: DynCurrencyQueryRepository,
    tracer: OperationTracer,
}

impl CurrencyQueryService {
    pub fn new(query: DynCurrencyQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "currency_query_service");

        Self {
            query,
            tracer: OperationTracer::new("currency-query-service", metrics),
        }
    }

    async fn find_currency(&self, id: i64) -> Result<CurrencyModel, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Currency not found with ID: {id}")))
    }

    async fn convert_inner(
        &self,
        req: &ConvertAmountQuery,
    ) -> Result<ConversionResponse, ServiceError> {
        validate_request(req)?;

        let (Some(amount), Some(from_id), Some(to_id)) =
            (req.amount, req.from_currency_id, req.to_currency_id)
        else {
            return Err(ServiceError::Internal(
                "conversion query passed validation with missing fields".into(),
            ));
        };

        let from = self.find_currency(from_id).await?;
        let to = self.find_currency(to_id).await?;
        let converted = convert(amount, from.exchange_rate, to.exchange_rate)?;

        info!(
            "💱 Converted {amount} {} -> {converted} {}",
            from.symbol, to.symbol
        );

        Ok(ConversionResponse::new(amount, from, to, converted))
    }
}

#[async_trait]
impl CurrencyQueryServiceTrait for CurrencyQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CurrencyResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "currency_find_all",
            vec![
                KeyValue::new("component", "currency"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        match self.query.find_all().await {
            Ok(currencies) => {
                info!("✅ Retrieved {} currencies", currencies.len());
                self.tracer
                    .success(&tracing_ctx, method, "Currencies retrieved");

                let data = currencies.into_iter().map(CurrencyResponse::from).collect();
                Ok(ApiResponse::ok("Currencies retrieved successfully", data))
            }
            Err(e) => {
                error!("❌ Failed to retrieve currencies: {e:?}");
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to retrieve currencies: {e}"),
                );
                Err(e.into())
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CurrencyResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "currency_find_by_id",
            vec![
                KeyValue::new("component", "currency"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("currency.id", id),
            ],
        );

        match self.find_currency(id).await {
            Ok(currency) => {
                self.tracer
                    .success(&tracing_ctx, method, "Currency retrieved");
                Ok(ApiResponse::ok(
                    "Currency retrieved successfully",
                    currency.into(),
                ))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to retrieve currency {id}: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn convert_amount(
        &self,
        req: &ConvertAmountQuery,
    ) -> Result<ApiResponse<ConversionResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "currency_convert_amount",
            vec![
                KeyValue::new("component", "currency"),
                KeyValue::new("operation", "convert_amount"),
                KeyValue::new("from_currency_id", req.from_currency_id.unwrap_or_default()),
                KeyValue::new("to_currency_id", req.to_currency_id.unwrap_or_default()),
            ],
        );

        match self.convert_inner(req).await {
            Ok(conversion) => {
                self.tracer.success(&tracing_ctx, method, "Amount converted");
                Ok(ApiResponse::ok("Amount converted successfully", conversion))
            }
            Err(e) => {
                self.tracer.failure(
                    &tracing_ctx,
                    method,
                    &format!("Failed to convert amount: {e}"),
                );
                Err(e)
            }
        }
    }
}
