//! Repository factory for dependency injection.
//!
//! This module creates repository instances from runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::cache::CachedRepository;
use super::repositories::{CsvRepository, LocalRepository};
use super::repository::{CatalogRepository, RepositoryError, RepositoryResult};
use crate::config::AppConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// KOI table read from a CSV file
    Csv,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("csv", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" | "file" => Ok(Self::Csv),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use kepler_explorer::config::AppConfig;
/// use kepler_explorer::db::RepositoryFactory;
///
/// let mut config = AppConfig::default();
/// config.catalog.repository = "local".to_string();
/// config.cache.enabled = true;
///
/// let repo = RepositoryFactory::from_config(&config).unwrap();
/// assert_eq!(repo.source_description(), "cached(local)");
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn CatalogRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository reading the given CSV file.
    pub fn create_csv(path: impl Into<std::path::PathBuf>) -> Arc<dyn CatalogRepository> {
        Arc::new(CsvRepository::new(path))
    }

    /// Wrap a repository in an explicit in-memory cache.
    pub fn with_cache(inner: Arc<dyn CatalogRepository>) -> Arc<dyn CatalogRepository> {
        Arc::new(CachedRepository::new(inner))
    }

    /// Build the repository described by `config`.
    pub fn from_config(config: &AppConfig) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let repo_type = RepositoryType::from_str(&config.catalog.repository)
            .map_err(RepositoryError::configuration)?;

        let repo = match repo_type {
            RepositoryType::Csv => {
                let path = &config.catalog.data_path;
                if !path.is_file() {
                    log::warn!(
                        "Planet data file {} does not exist yet; requests will fail until it does",
                        path.display()
                    );
                }
                Self::create_csv(path.clone())
            }
            RepositoryType::Local => {
                log::warn!("Using empty in-memory planet repository");
                Self::create_local()
            }
        };

        Ok(if config.cache.enabled {
            Self::with_cache(repo)
        } else {
            repo
        })
    }
}
