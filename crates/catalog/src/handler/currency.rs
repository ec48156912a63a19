use crate::{
    abstract_trait::currency::service::DynCurrencyQueryService,
    domain::{
        requests::currency::ConvertAmountQuery,
        response::{ApiResponse, ConversionResponse, CurrencyResponse},
    },
    middleware::{jwt::auth_middleware, validate::ValidatedQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/v1/currencies",
    tag = "Currency",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All currencies ordered by name", body = ApiResponse<Vec<CurrencyResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_currencies(
    Extension(service): Extension<DynCurrencyQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_all()
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to retrieve currencies"))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/currencies/{id}",
    tag = "Currency",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Currency ID")),
    responses(
        (status = 200, description = "Currency details", body = ApiResponse<CurrencyResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Currency not found", body = ErrorResponse)
    )
)]
pub async fn get_currency(
    Extension(service): Extension<DynCurrencyQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_by_id(id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to retrieve currency"))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/currencies/convert",
    tag = "Currency",
    security(("bearer_auth" = [])),
    params(ConvertAmountQuery),
    responses(
        (status = 200, description = "Converted amount", body = ApiResponse<ConversionResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Currency not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn convert_amount(
    Extension(service): Extension<DynCurrencyQueryService>,
    ValidatedQuery(params): ValidatedQuery<ConvertAmountQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .convert_amount(&params)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to convert amount"))?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn currency_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/currencies", get(get_currencies))
        .route("/api/v1/currencies/convert", get(convert_amount))
        .route("/api/v1/currencies/{id}", get(get_currency))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.currency_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
