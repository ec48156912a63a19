use crate::{domain::response::decimal_to_f64, model::currency::Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct CurrencyResponse {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    #[schema(example = 0.92)]
    pub exchange_rate: f64,
    #[schema(example = "Euro (EUR)")]
    pub formatted_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Currency> for CurrencyResponse {
    fn from(value: Currency) -> Self {
        CurrencyResponse {
            formatted_name: value.formatted_name(),
            id: value.id,
            name: value.name,
            symbol: value.symbol,
            exchange_rate: decimal_to_f64(value.exchange_rate),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ConversionResponse {
    pub amount: f64,
    pub from_currency: CurrencyResponse,
    pub to_currency: CurrencyResponse,
    pub converted_amount: f64,
}

impl ConversionResponse {
    pub fn new(amount: Decimal, from: Currency, to: Currency, converted: Decimal) -> Self {
        ConversionResponse {
            amount: decimal_to_f64(amount),
            from_currency: from.into(),
            to_currency: to.into(),
            converted_amount: decimal_to_f64(converted),
        }
    }
}
