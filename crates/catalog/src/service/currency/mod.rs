mod command;
mod query;

pub use self::command::CurrencyCommandService;
pub use self::query::CurrencyQueryService;
