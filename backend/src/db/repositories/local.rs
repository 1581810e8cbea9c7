//! In-memory catalog repository for tests and local development.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::repository::{CatalogRepository, RepositoryResult};
use crate::models::PlanetRecord;

/// Holds a planet collection in memory.
#[derive(Debug, Default)]
pub struct LocalRepository {
    planets: RwLock<Vec<PlanetRecord>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_planets(planets: Vec<PlanetRecord>) -> Self {
        Self {
            planets: RwLock::new(planets),
        }
    }

    /// Replace the stored collection.
    pub fn replace(&self, planets: Vec<PlanetRecord>) {
        *self.planets.write() = planets;
    }

    pub fn len(&self) -> usize {
        self.planets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.read().is_empty()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn load_planets(&self) -> RepositoryResult<Vec<PlanetRecord>> {
        Ok(self.planets.read().clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    fn source_description(&self) -> String {
        "local".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_is_visible_on_next_load() {
        let repo = LocalRepository::with_planets(vec![PlanetRecord::new("K1")]);
        assert_eq!(repo.load_planets().await.unwrap().len(), 1);

        repo.replace(vec![PlanetRecord::new("K1"), PlanetRecord::new("K2")]);
        assert_eq!(repo.load_planets().await.unwrap().len(), 2);
        assert_eq!(repo.len(), 2);
        assert!(!repo.is_empty());
    }
}
