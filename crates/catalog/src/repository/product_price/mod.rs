mod command;
mod query;

pub use self::command::ProductPriceCommandRepository;
pub use self::query::ProductPriceQueryRepository;
