pub mod currency;
pub mod product;
pub mod product_price;
