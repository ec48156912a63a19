use crate::{
    domain::response::{CurrencyResponse, ProductPriceResponse, decimal_to_f64},
    model::product::ProductWithRelations,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 999.99)]
    pub price: f64,
    pub currency: CurrencyResponse,
    pub tax_cost: f64,
    pub manufacturing_cost: f64,
    /// `price + tax_cost + manufacturing_cost`.
    pub total_cost: f64,
    pub prices: Vec<ProductPriceResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductWithRelations> for ProductResponse {
    fn from(value: ProductWithRelations) -> Self {
        let ProductWithRelations {
            product,
            currency,
            prices,
        } = value;

        ProductResponse {
            total_cost: decimal_to_f64(product.total_cost()),
            id: product.id,
            name: product.name,
            description: product.description,
            price: decimal_to_f64(product.price),
            currency: currency.into(),
            tax_cost: decimal_to_f64(product.tax_cost),
            manufacturing_cost: decimal_to_f64(product.manufacturing_cost),
            prices: prices.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_rfc3339(),
            updated_at: product.updated_at.to_rfc3339(),
        }
    }
}
