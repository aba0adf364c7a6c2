use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use chirpy_auth::SessionManager;
use chirpy_config::{CorsConfig, JwtConfig, Platform, ServerConfig, StoreBackend};
use chirpy_db::{MemoryStore, PgStore, Store, init_db_pool, run_migrations};

use crate::metrics::VisitCounter;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub sessions: SessionManager,
    pub jwt_config: JwtConfig,
    pub platform: Platform,
    pub cors_config: CorsConfig,
    pub fileserver_root: String,
    pub hits: Arc<VisitCounter>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt_config: JwtConfig, platform: Platform) -> Self {
        Self {
            sessions: SessionManager::new(store.clone(), jwt_config.clone()),
            store,
            jwt_config,
            platform,
            cors_config: CorsConfig::from_env(),
            fileserver_root: ".".to_string(),
            hits: Arc::new(VisitCounter::default()),
        }
    }

    pub fn with_fileserver_root(mut self, root: impl Into<String>) -> Self {
        self.fileserver_root = root.into();
        self
    }
}

pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn Store> = match server_config.store_backend {
        StoreBackend::Postgres => {
            let pool = init_db_pool()
                .await
                .context("failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("failed to run migrations")?;
            info!("using PostgreSQL store");
            Arc::new(PgStore::new(pool))
        }
        StoreBackend::Memory => {
            warn!("using in-memory store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_dev_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    Ok(AppState::new(store, jwt_config, Platform::from_env())
        .with_fileserver_root(server_config.fileserver_root.clone()))
}
