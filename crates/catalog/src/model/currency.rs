use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Currency {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    /// Units of this currency per base unit; 1.000000 is the base itself.
    pub exchange_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Currency {
    pub fn formatted_name(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}
