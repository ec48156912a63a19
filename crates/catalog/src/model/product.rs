use crate::model::{currency::Currency, product_price::ProductPriceWithCurrency};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency_id: i64,
    pub tax_cost: Decimal,
    pub manufacturing_cost: Decimal,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn total_cost(&self) -> Decimal {
        self.price + self.tax_cost + self.manufacturing_cost
    }

    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A product with its base currency and every price override loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithRelations {
    pub product: Product,
    pub currency: Currency,
    pub prices: Vec<ProductPriceWithCurrency>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_cost_sums_price_and_costs() {
        let now = Utc::now();
        let product = Product {
            id: 1,
            name: "Widget".into(),
            description: None,
            price: dec!(100.00),
            currency_id: 1,
            tax_cost: dec!(10.00),
            manufacturing_cost: dec!(5.00),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(product.total_cost(), dec!(115.00));
        assert!(!product.is_trashed());
    }
}
