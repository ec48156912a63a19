use crate::di::{DependenciesInject, Repositories};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::{ConnectionPool, JwtConfig},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &self.jwt_config)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, jwt_secret: &str) -> Self {
        Self::with_repositories(Repositories::postgres(pool), jwt_secret)
    }

    pub fn with_repositories(repos: Repositories, jwt_secret: &str) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::with_repositories(repos, &mut registry);
        let jwt_config: DynJwtService = Arc::new(JwtConfig::new(jwt_secret));

        Self {
            di_container,
            jwt_config,
            registry: Arc::new(registry),
        }
    }
}
