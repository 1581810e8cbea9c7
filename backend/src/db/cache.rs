//! Explicit in-memory cache in front of a catalog repository.
//!
//! The cached collection is served until [`CachedRepository::invalidate`] is
//! called; there is no time-based expiry. A load that was already running
//! when `invalidate` ran is returned to its caller but not cached.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::checksum::calculate_planets_checksum;
use super::repository::{CatalogRepository, RepositoryResult};
use crate::models::PlanetRecord;

/// Snapshot metadata for the currently cached collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatus {
    pub records: usize,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug)]
struct CachedCatalog {
    planets: Arc<Vec<PlanetRecord>>,
    status: CacheStatus,
}

/// Wraps another repository and keeps its last load in memory.
pub struct CachedRepository {
    inner: Arc<dyn CatalogRepository>,
    state: RwLock<Option<CachedCatalog>>,
    /// Bumped by every invalidation.
    generation: AtomicU64,
}

impl CachedRepository {
    pub fn new(inner: Arc<dyn CatalogRepository>) -> Self {
        Self {
            inner,
            state: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Whether a collection is currently held.
    pub fn is_warm(&self) -> bool {
        self.state.read().is_some()
    }

    fn cached(&self) -> Option<Arc<Vec<PlanetRecord>>> {
        self.state.read().as_ref().map(|c| Arc::clone(&c.planets))
    }
}

#[async_trait]
impl CatalogRepository for CachedRepository {
    async fn load_planets(&self) -> RepositoryResult<Vec<PlanetRecord>> {
        if let Some(planets) = self.cached() {
            return Ok(planets.as_ref().clone());
        }

        let generation = self.generation.load(Ordering::Acquire);
        let planets = self.inner.load_planets().await?;
        let status = CacheStatus {
            records: planets.len(),
            checksum: calculate_planets_checksum(&planets)?,
            loaded_at: Utc::now(),
        };

        let mut state = self.state.write();
        if self.generation.load(Ordering::Acquire) != generation {
            log::debug!("Catalog invalidated during load; not caching this snapshot");
            return Ok(planets);
        }
        log::info!(
            "Cached {} planets from {} (checksum {})",
            status.records,
            self.inner.source_description(),
            &status.checksum[..12]
        );
        *state = Some(CachedCatalog {
            planets: Arc::new(planets.clone()),
            status,
        });
        Ok(planets)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.inner.health_check().await
    }

    fn source_description(&self) -> String {
        format!("cached({})", self.inner.source_description())
    }

    fn invalidate(&self) -> bool {
        let dropped = {
            let mut state = self.state.write();
            self.generation.fetch_add(1, Ordering::AcqRel);
            state.take().is_some()
        };
        self.inner.invalidate() || dropped
    }

    fn cache_status(&self) -> Option<CacheStatus> {
        self.state.read().as_ref().map(|c| c.status.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use tokio::sync::Notify;

    fn planets(n: usize) -> Vec<PlanetRecord> {
        (0..n).map(|i| PlanetRecord::new(format!("K{:05}.01", i))).collect()
    }

    #[tokio::test]
    async fn test_serves_cached_until_invalidated() {
        let local = Arc::new(LocalRepository::with_planets(planets(2)));
        let cached = CachedRepository::new(local.clone());

        assert!(!cached.is_warm());
        assert_eq!(cached.load_planets().await.unwrap().len(), 2);
        assert!(cached.is_warm());

        local.replace(planets(5));
        assert_eq!(cached.load_planets().await.unwrap().len(), 2);

        assert!(cached.invalidate());
        assert_eq!(cached.load_planets().await.unwrap().len(), 5);
    }

    /// Reads its collection, then parks until released.
    struct GatedRepository {
        inner: LocalRepository,
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl CatalogRepository for GatedRepository {
        async fn load_planets(&self) -> RepositoryResult<Vec<PlanetRecord>> {
            let snapshot = self.inner.load_planets().await?;
            self.started.notify_one();
            self.release.notified().await;
            Ok(snapshot)
        }

        async fn health_check(&self) -> RepositoryResult<bool> {
            Ok(true)
        }

        fn source_description(&self) -> String {
            "gated".to_string()
        }
    }

    #[tokio::test]
    async fn test_invalidate_during_load_discards_snapshot() {
        let gated = Arc::new(GatedRepository {
            inner: LocalRepository::with_planets(planets(2)),
            started: Notify::new(),
            release: Notify::new(),
        });
        let cached = Arc::new(CachedRepository::new(gated.clone()));

        let loader = tokio::spawn({
            let cached = Arc::clone(&cached);
            async move { cached.load_planets().await.unwrap().len() }
        });

        gated.started.notified().await;
        cached.invalidate();
        gated.inner.replace(planets(5));
        gated.release.notify_one();

        // The in-flight caller still gets what it read.
        assert_eq!(loader.await.unwrap(), 2);
        assert!(!cached.is_warm());

        gated.release.notify_one();
        assert_eq!(cached.load_planets().await.unwrap().len(), 5);
        assert!(cached.is_warm());
    }

    #[tokio::test]
    async fn test_invalidate_cold_cache() {
        let cached = CachedRepository::new(Arc::new(LocalRepository::new()));
        assert!(!cached.invalidate());
        assert!(cached.cache_status().is_none());
    }

    #[tokio::test]
    async fn test_cache_status_reports_snapshot() {
        let cached = CachedRepository::new(Arc::new(LocalRepository::with_planets(planets(3))));
        cached.load_planets().await.unwrap();

        let status = cached.cache_status().unwrap();
        assert_eq!(status.records, 3);
        assert_eq!(status.checksum.len(), 64);
        assert_eq!(cached.source_description(), "cached(local)");
    }
}
