use crate::error::ClusterFindError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cluster search service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// API key expected in the x-api-key header
    pub api_key: String,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            api_key: "dev-secret-key".to_string(),
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ClusterFindError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            api_key: std::env::var("API_KEY")
                .unwrap_or_else(|_| "dev-secret-key".to_string()),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;
        config.ensure_directories()?;

        Ok(config)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), ClusterFindError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                ClusterFindError::config(format!(
                    "Failed to create log directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ClusterFindError> {
        if self.api_key.is_empty() {
            return Err(ClusterFindError::config("API key cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(ClusterFindError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
