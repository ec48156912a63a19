mod api;
mod currency;
mod pagination;
mod product;
mod product_price;

pub use self::api::{ApiResponse, ApiResponsePagination, MessageResponse};
pub use self::currency::{ConversionResponse, CurrencyResponse};
pub use self::pagination::PaginationMeta;
pub use self::product::ProductResponse;
pub use self::product_price::{ConvertedPriceResponse, ProductPriceResponse};

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Decimals leave the API as JSON numbers.
pub(crate) fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
