//! Repository trait for planet catalog access.
//!
//! The rest of the crate only sees [`CatalogRepository`]; where the records
//! come from (a CSV file, memory, a cache in front of either) is decided by
//! [`crate::db::factory`].

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::db::cache::CacheStatus;
use crate::models::PlanetRecord;

/// Source of the full planet collection.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load every record, in source order.
    async fn load_planets(&self) -> RepositoryResult<Vec<PlanetRecord>>;

    /// Check that the underlying data can currently be reached.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Short human-readable description of where the data comes from.
    fn source_description(&self) -> String;

    /// Drop any cached state so the next load reads the source again.
    ///
    /// Returns `true` if something was actually invalidated.
    fn invalidate(&self) -> bool {
        false
    }

    /// Metadata of the cached collection, if this repository caches.
    fn cache_status(&self) -> Option<CacheStatus> {
        None
    }
}
