//! Server configuration.

use std::env;

/// Where users and exercises are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local store, lost on exit.
    Memory,
    /// SQLite database at the given `sqlite:` URL.
    Sqlite(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL. Unset selects the in-memory store.
    pub database_url: Option<String>,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        if let Some(url) = &database_url {
            if !url.starts_with("sqlite:") {
                anyhow::bail!("DATABASE_URL must be a sqlite: URL, got {url:?}");
            }
        }

        Ok(Self {
            host: lookup("TRACKER_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url,
            log_level: lookup("TRACKER_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured store backend.
    pub fn store_backend(&self) -> StoreBackend {
        match &self.database_url {
            Some(url) => StoreBackend::Sqlite(url.clone()),
            None => StoreBackend::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.store_backend(), StoreBackend::Memory);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("TRACKER_SERVER_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite:tracker.db"),
            ("TRACKER_LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.store_backend(),
            StoreBackend::Sqlite("sqlite:tracker.db".to_string())
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("DATABASE_URL", "mongodb://localhost/tracker")]).is_err());
    }

    #[test]
    fn test_empty_database_url_means_memory() {
        let config = load(&[("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.store_backend(), StoreBackend::Memory);
    }
}
