use crate::{
    abstract_trait::{
        currency::{
            repository::{DynCurrencyCommandRepository, DynCurrencyQueryRepository},
            service::{DynCurrencyCommandService, DynCurrencyQueryService},
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
        product_price::{
            repository::{DynProductPriceCommandRepository, DynProductPriceQueryRepository},
            service::DynProductPriceService,
        },
    },
    repository::{
        currency::{CurrencyCommandRepository, CurrencyQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
        product_price::{ProductPriceCommandRepository, ProductPriceQueryRepository},
    },
    service::{
        currency::{CurrencyCommandService, CurrencyQueryService},
        product::{ProductCommandService, ProductQueryService},
        product_price::{ProductPriceService, ProductPriceServiceDeps},
        relations::ProductRelations,
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Every repository the services depend on.
#[derive(Clone)]
pub struct Repositories {
    pub currency_query: DynCurrencyQueryRepository,
    pub currency_command: DynCurrencyCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub price_query: DynProductPriceQueryRepository,
    pub price_command: DynProductPriceCommandRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            currency_query: Arc::new(CurrencyQueryRepository::new(pool.clone())),
            currency_command: Arc::new(CurrencyCommandRepository::new(pool.clone())),
            product_query: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command: Arc::new(ProductCommandRepository::new(pool.clone())),
            price_query: Arc::new(ProductPriceQueryRepository::new(pool.clone())),
            price_command: Arc::new(ProductPriceCommandRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub currency_query: DynCurrencyQueryService,
    pub currency_command: DynCurrencyCommandService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub product_price: DynProductPriceService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("currency_query", &"CurrencyQueryService")
            .field("currency_command", &"CurrencyCommandService")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("product_price", &"ProductPriceService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn with_repositories(repos: Repositories, registry: &mut Registry) -> Self {
        let relations = ProductRelations::new(repos.currency_query.clone(), repos.price_query.clone());

        let currency_query: DynCurrencyQueryService = Arc::new(CurrencyQueryService::new(
            repos.currency_query.clone(),
            registry,
        ));
        let currency_command: DynCurrencyCommandService = Arc::new(CurrencyCommandService::new(
            repos.currency_command.clone(),
            registry,
        ));

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            repos.product_query.clone(),
            relations.clone(),
            registry,
        ));
        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            repos.product_command.clone(),
            repos.currency_query.clone(),
            relations.clone(),
            registry,
        ));

        let product_price: DynProductPriceService = Arc::new(ProductPriceService::new(
            ProductPriceServiceDeps {
                product_query: repos.product_query,
                currency_query: repos.currency_query,
                price_query: repos.price_query,
                price_command: repos.price_command,
                relations,
            },
            registry,
        ));

        Self {
            currency_query,
            currency_command,
            product_query,
            product_command,
            product_price,
        }
    }
}
