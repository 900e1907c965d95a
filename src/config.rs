//! Configuration module
//!
//! Reads `config.toml` from the user config directory
//! (`~/.config/table-booking/config.toml` on Linux) unless another path is
//! given. Every field has a default, so a partial file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{TableNumber, DEFAULT_TABLES};
use crate::infrastructure::cache::default_cache_dir;
use crate::shared::errors::InfraError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BOOKING_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub inventory: InventoryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            shutdown_timeout: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`; `RUST_LOG` wins if set
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Tables registered at startup
    pub seed_tables: Vec<u32>,
    /// Directory holding the mirrored inventory (`tables.json`)
    pub cache_dir: Option<PathBuf>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            seed_tables: DEFAULT_TABLES.to_vec(),
            cache_dir: None,
        }
    }
}

impl InventoryConfig {
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }

    /// Seed tables as domain values. Zero entries are skipped.
    pub fn seed_tables(&self) -> Vec<TableNumber> {
        self.seed_tables
            .iter()
            .filter_map(|&n| TableNumber::new(i64::from(n)).ok())
            .collect()
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), InfraError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `$BOOKING_CONFIG` if set, else `<config dir>/table-booking/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("table-booking")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.address(), "0.0.0.0:5000");
        assert_eq!(cfg.inventory.seed_tables, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [inventory]
            seed_tables = [10, 0, 12]
            cache_dir = "/tmp/booking-cache"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.level, "info");
        let seeds: Vec<u32> = cfg.inventory.seed_tables().into_iter().map(u32::from).collect();
        assert_eq!(seeds, vec![10, 12]);
        assert_eq!(cfg.inventory.cache_dir(), PathBuf::from("/tmp/booking-cache"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("[server\nport = ").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.logging.format = "json".into();
        cfg.inventory.seed_tables = vec![2, 4];
        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), cfg);
    }
}
