use std::sync::Arc;

use devicegate_config::{CorsConfig, JwtConfig, MetricsConfig, StoreConfig};

use crate::modules::metrics::service::MetricsSource;
use crate::store::{IdentityStore, StoreError};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<IdentityStore>,
    pub metrics: Arc<MetricsSource>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub store_config: StoreConfig,
}

impl AppState {
    pub fn new(
        store: IdentityStore,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        metrics_config: MetricsConfig,
        store_config: StoreConfig,
    ) -> Self {
        Self {
            store: Arc::new(store),
            metrics: Arc::new(MetricsSource::new(metrics_config)),
            jwt_config,
            cors_config,
            store_config,
        }
    }
}

pub async fn init_app_state() -> Result<AppState, StoreError> {
    let store_config = StoreConfig::from_env();
    let store = IdentityStore::open(&store_config).await?;

    Ok(AppState::new(
        store,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        MetricsConfig::from_env(),
        store_config,
    ))
}
