/// Application context and dependency injection
use crate::{
    config::{ServerConfig, StorageBackendConfig},
    db,
    error::AppResult,
    file_store::{DiskFileStore, FileStore, SqliteFileStore},
    templates,
};
use minijinja::Environment;
use std::sync::Arc;

/// Application context holding all shared services
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub store: Arc<dyn FileStore>,
    pub templates: Arc<Environment<'static>>,
}

impl AppContext {
    /// Create a new application context from configuration
    ///
    /// Performs all startup initialization: directory creation for the
    /// disk backend, pool construction and migration for the SQLite one.
    pub async fn new(config: ServerConfig) -> AppResult<Self> {
        // Validate configuration
        config.validate()?;

        Self::ensure_directories(&config).await?;

        let store: Arc<dyn FileStore> = match &config.storage.backend {
            StorageBackendConfig::Disk { location } => {
                tracing::info!(location = %location.display(), "using disk storage backend");
                Arc::new(DiskFileStore::new(location.clone()))
            }
            StorageBackendConfig::Sqlite { db_path } => {
                tracing::info!(db = %db_path.display(), "using sqlite storage backend");
                let pool = db::create_pool(db_path, db::DatabaseOptions::default()).await?;
                db::run_migrations(&pool).await?;
                db::test_connection(&pool).await?;
                Arc::new(SqliteFileStore::new(pool))
            }
        };

        let templates = Arc::new(templates::environment()?);

        Ok(Self {
            config: Arc::new(config),
            store,
            templates,
        })
    }

    /// Ensure required directories exist
    async fn ensure_directories(config: &ServerConfig) -> AppResult<()> {
        tokio::fs::create_dir_all(&config.storage.data_directory).await?;

        if let StorageBackendConfig::Disk { location } = &config.storage.backend {
            tokio::fs::create_dir_all(location).await?;
        }

        Ok(())
    }

    /// Get service URL
    pub fn service_url(&self) -> String {
        format!(
            "http://{}:{}",
            self.config.service.hostname, self.config.service.port
        )
    }
}
