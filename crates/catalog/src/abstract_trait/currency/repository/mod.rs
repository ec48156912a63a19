mod command;
mod query;

pub use self::command::{CurrencyCommandRepositoryTrait, DynCurrencyCommandRepository};
pub use self::query::{CurrencyQueryRepositoryTrait, DynCurrencyQueryRepository};
