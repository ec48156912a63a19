mod command;
mod query;

pub use self::command::{DynProductPriceCommandRepository, ProductPriceCommandRepositoryTrait};
pub use self::query::{DynProductPriceQueryRepository, ProductPriceQueryRepositoryTrait};
