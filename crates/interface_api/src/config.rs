//! API configuration
//!
//! Settings come from `API_`-prefixed environment variables, for example
//! `API_PORT=9090` or `API_DB_MAX_CONNECTIONS=20`. Unset settings keep their
//! defaults.

use serde::Deserialize;
use std::time::Duration;

use infra_db::DatabaseConfig;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/insurance_policy".to_string(),
            log_level: "info".to_string(),
            db_max_connections: 10,
            db_min_connections: 1,
            db_connect_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings derived from the `db_*` settings
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
    }
}
