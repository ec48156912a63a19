mod command;
mod query;

pub use self::command::CurrencyCommandRepository;
pub use self::query::CurrencyQueryRepository;
