//! Service configuration.
//!
//! Settings come from a TOML file (see `kepler.toml` at the package root) and
//! may be overridden by environment variables. Every key has a default, so an
//! absent file or a partial file is fine.
//!
//! | Variable             | Overrides              |
//! |----------------------|------------------------|
//! | `KEPLER_CONFIG`      | config file location   |
//! | `HOST`               | `server.host`          |
//! | `PORT`               | `server.port`          |
//! | `KEPLER_REPOSITORY`  | `catalog.repository`   |
//! | `KEPLER_DATA_PATH`   | `catalog.data_path`    |
//! | `KEPLER_CACHE`       | `cache.enabled`        |

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::repository::RepositoryError;
use crate::transformations::{DEFAULT_GRID_BATCH, DEFAULT_PAGE_SIZE};

/// Full service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub explorer: ExplorerSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where planet records come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// `csv` or `local`.
    #[serde(default = "default_repository")]
    pub repository: String,
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

/// Off by default: every request then reads the data file again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default)]
    pub enabled: bool,
}

/// Paging limits for the explorer endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_grid_batch")]
    pub grid_batch: usize,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_repository() -> String {
    "csv".to_string()
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/kepler_data.csv")
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_grid_batch() -> usize {
    DEFAULT_GRID_BATCH
}

fn default_max_page_size() -> usize {
    1000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            data_path: default_data_path(),
        }
    }
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            grid_batch: default_grid_batch(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        let config: AppConfig = toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `catalog.data_path` is taken relative to the file's own
    /// directory, so the same file works from any working directory.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if config.catalog.data_path.is_relative() {
            if let Some(dir) = path.as_ref().parent() {
                config.catalog.data_path = dir.join(&config.catalog.data_path);
            }
        }
        Ok(config)
    }

    /// Locate a config file.
    ///
    /// `KEPLER_CONFIG` wins when set; otherwise searches for `kepler.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn find_config_file() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var("KEPLER_CONFIG") {
            return Some(PathBuf::from(explicit));
        }

        [
            PathBuf::from("kepler.toml"),
            PathBuf::from("backend/kepler.toml"),
            PathBuf::from("../kepler.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load from the default location, fall back to defaults, then apply
    /// environment overrides.
    pub fn load() -> Result<Self, RepositoryError> {
        let mut config = match Self::find_config_file() {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                log::info!("No kepler.toml found, using default configuration");
                Self::default()
            }
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT`, `KEPLER_REPOSITORY`, `KEPLER_DATA_PATH` and
    /// `KEPLER_CACHE` on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), RepositoryError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                RepositoryError::configuration(format!("Invalid PORT value: {}", port))
            })?;
        }
        if let Ok(repository) = std::env::var("KEPLER_REPOSITORY") {
            self.catalog.repository = repository;
        }
        if let Ok(path) = std::env::var("KEPLER_DATA_PATH") {
            self.catalog.data_path = PathBuf::from(path);
        }
        if let Ok(flag) = std::env::var("KEPLER_CACHE") {
            self.cache.enabled = parse_flag(&flag).ok_or_else(|| {
                RepositoryError::configuration(format!("Invalid KEPLER_CACHE value: {}", flag))
            })?;
        }
        Ok(())
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), RepositoryError> {
        let explorer = &self.explorer;
        if explorer.page_size == 0 || explorer.grid_batch == 0 {
            return Err(RepositoryError::configuration(
                "explorer.page_size and explorer.grid_batch must be positive",
            ));
        }
        if explorer.page_size > explorer.max_page_size {
            return Err(RepositoryError::configuration(format!(
                "explorer.page_size ({}) exceeds explorer.max_page_size ({})",
                explorer.page_size, explorer.max_page_size
            )));
        }
        Ok(())
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
