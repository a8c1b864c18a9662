/// Configuration management for pdfdrop
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_directory: PathBuf,
    pub backend: StorageBackendConfig,
}

/// File storage backend selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StorageBackendConfig {
    /// Store uploads as individual files in a directory
    Disk { location: PathBuf },

    /// Store uploads as rows in a single SQLite table
    Sqlite { db_path: PathBuf },
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();

        let hostname = env::var("PDFDROP_HOSTNAME").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PDFDROP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| AppError::Config("Invalid port number".to_string()))?;

        let data_directory: PathBuf = env::var("PDFDROP_DATA_DIRECTORY")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let backend = match env::var("PDFDROP_STORAGE_BACKEND")
            .unwrap_or_else(|_| "disk".to_string())
            .to_lowercase()
            .as_str()
        {
            "disk" => StorageBackendConfig::Disk {
                location: env::var("PDFDROP_UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| data_directory.join("uploads")),
            },
            "sqlite" => StorageBackendConfig::Sqlite {
                db_path: env::var("PDFDROP_DB_LOCATION")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| data_directory.join("files.sqlite")),
            },
            other => {
                return Err(AppError::Config(format!(
                    "Unknown storage backend '{}', expected 'disk' or 'sqlite'",
                    other
                )))
            }
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(ServerConfig {
            service: ServiceConfig { hostname, port },
            storage: StorageConfig {
                data_directory,
                backend,
            },
            logging: LoggingConfig { level: log_level },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.service.hostname.is_empty() {
            return Err(AppError::Config("Hostname cannot be empty".to_string()));
        }

        if self.service.port == 0 {
            return Err(AppError::Config("Port cannot be zero".to_string()));
        }

        Ok(())
    }
}
