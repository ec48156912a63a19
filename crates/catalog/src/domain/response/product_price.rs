use crate::{
    domain::response::{CurrencyResponse, decimal_to_f64},
    model::product_price::ProductPriceWithCurrency,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductPriceResponse {
    pub id: i64,
    pub product_id: i64,
    pub currency: CurrencyResponse,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductPriceWithCurrency> for ProductPriceResponse {
    fn from(value: ProductPriceWithCurrency) -> Self {
        let ProductPriceWithCurrency { price, currency } = value;

        ProductPriceResponse {
            id: price.id,
            product_id: price.product_id,
            currency: currency.into(),
            price: decimal_to_f64(price.price),
            created_at: price.created_at.to_rfc3339(),
            updated_at: price.updated_at.to_rfc3339(),
        }
    }
}

/// A product's base price expressed in one currency.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ConvertedPriceResponse {
    pub currency_id: i64,
    pub currency_name: String,
    pub currency_symbol: String,
    pub price: f64,
}
