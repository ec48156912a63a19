use crate::domain::requests::rules::{not_blank, validate_exchange_rate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCurrencyRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 10, message = "The symbol may not be greater than 10 characters.")
    )]
    pub symbol: String,

    #[validate(custom(function = "validate_exchange_rate"))]
    pub exchange_rate: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCurrencyRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        custom(function = "not_blank"),
        length(max = 10, message = "The symbol may not be greater than 10 characters.")
    )]
    pub symbol: Option<String>,

    #[validate(custom(function = "validate_exchange_rate"))]
    pub exchange_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertAmountQuery {
    #[validate(required(message = "The amount field is required."))]
    #[param(value_type = f64, example = 100.00)]
    pub amount: Option<Decimal>,

    #[validate(required(message = "The from_currency_id field is required."))]
    #[param(value_type = i64, example = 1)]
    pub from_currency_id: Option<i64>,

    #[validate(required(message = "The to_currency_id field is required."))]
    #[param(value_type = i64, example = 2)]
    pub to_currency_id: Option<i64>,
}
