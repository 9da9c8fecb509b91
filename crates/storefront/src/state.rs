use crate::di::{DependenciesInject, DependenciesInjectDeps};
use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{ConnectionPool, Hashing, JwtConfig},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .field("metrics", &self.metrics)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, jwt_secret: &str) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash: hashing,
            jwt_config: jwt_config.clone(),
            registry: registry.clone(),
        })
        .await;

        system_metrics.register(&mut *registry.lock().await);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            jwt_config,
            di_container,
            registry,
            metrics,
            system_metrics,
        })
    }
}
