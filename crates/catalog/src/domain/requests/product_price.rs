use crate::domain::requests::rules::validate_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductPriceRequest {
    #[validate(required(message = "The currency_id field is required."))]
    #[schema(example = 2)]
    pub currency_id: Option<i64>,

    #[validate(
        required(message = "The price field is required."),
        custom(function = "validate_money")
    )]
    #[schema(value_type = f64, example = 850.50)]
    pub price: Option<Decimal>,
}
