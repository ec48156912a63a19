mod command;
mod query;

pub use self::command::{CurrencyCommandServiceTrait, DynCurrencyCommandService};
pub use self::query::{CurrencyQueryServiceTrait, DynCurrencyQueryService};
