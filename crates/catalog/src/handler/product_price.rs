use crate::{
    abstract_trait::product_price::service::DynProductPriceService,
    domain::{
        requests::product_price::CreateProductPriceRequest,
        response::{ApiResponse, ConvertedPriceResponse, ProductPriceResponse},
    },
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
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
    path = "/api/v1/products/{id}/prices",
    tag = "Product Price",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Price overrides of the product", body = ApiResponse<Vec<ProductPriceResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product_prices(
    Extension(service): Extension<DynProductPriceService>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_by_product(product_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to retrieve prices"))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/prices",
    tag = "Product Price",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Product ID")),
    request_body = CreateProductPriceRequest,
    responses(
        (status = 201, description = "Price created or updated", body = ApiResponse<ProductPriceResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Product or currency not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Failed to save price", body = ErrorResponse)
    )
)]
pub async fn upsert_product_price(
    Extension(service): Extension<DynProductPriceService>,
    Path(product_id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductPriceRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .upsert_price(product_id, &body)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to create/update price"))?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}/prices/converted",
    tag = "Product Price",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Base price converted into every currency", body = ApiResponse<Vec<ConvertedPriceResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_converted_prices(
    Extension(service): Extension<DynProductPriceService>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .prices_in_all_currencies(product_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to convert prices"))?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn product_price_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/v1/products/{id}/prices",
            get(get_product_prices).post(upsert_product_price),
        )
        .route(
            "/api/v1/products/{id}/prices/converted",
            get(get_converted_prices),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_price.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
