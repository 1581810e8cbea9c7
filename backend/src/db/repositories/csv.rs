//! CSV-file backed catalog repository.

use async_trait::async_trait;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::db::repository::{
    CatalogRepository, ErrorContext, RepositoryError, RepositoryResult,
};
use crate::models::PlanetRecord;
use crate::parsing::parse_planets_reader;

/// Reads the KOI table from disk on every call.
///
/// Nothing is retained between loads; put a
/// [`CachedRepository`](crate::db::cache::CachedRepository) in front of it to
/// keep a collection in memory.
#[derive(Debug, Clone)]
pub struct CsvRepository {
    path: PathBuf,
}

impl CsvRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_planets(path: &Path) -> RepositoryResult<Vec<PlanetRecord>> {
    let context = || ErrorContext::new("load_planets").with_source(path.display().to_string());

    let file = File::open(path).map_err(|e| {
        RepositoryError::data_unavailable_with_context(
            format!("Cannot open planet data file: {}", e),
            context(),
        )
    })?;

    parse_planets_reader(file).map_err(|e| {
        RepositoryError::parse_with_context(
            "Malformed planet data file",
            context().with_details(format!("{:#}", e)),
        )
    })
}

#[async_trait]
impl CatalogRepository for CsvRepository {
    async fn load_planets(&self) -> RepositoryResult<Vec<PlanetRecord>> {
        let path = self.path.clone();
        let planets = tokio::task::spawn_blocking(move || read_planets(&path))
            .await
            .map_err(|e| RepositoryError::internal(format!("Loader task failed: {}", e)))??;

        log::debug!(
            "Loaded {} planets from {}",
            planets.len(),
            self.path.display()
        );
        Ok(planets)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.path.is_file())
    }

    fn source_description(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_planets_from_file() {
        let file = temp_csv("# comment\nkepoi_name,koi_prad\nK00001.01,1.1\nK00002.01,\n");
        let repo = CsvRepository::new(file.path());

        let planets = repo.load_planets().await.unwrap();
        assert_eq!(planets.len(), 2);
        assert_eq!(planets[0].koi_prad, Some(1.1));
        assert_eq!(planets[1].koi_prad, None);
        assert!(repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_file_is_data_unavailable() {
        let repo = CsvRepository::new("/nonexistent/kepler_data.csv");

        let err = repo.load_planets().await.unwrap_err();
        assert!(matches!(err, RepositoryError::DataUnavailable { .. }));
        assert!(!repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let file = temp_csv("kepoi_name,koi_prad\nK1,1.0,unexpected\n");
        let repo = CsvRepository::new(file.path());

        let err = repo.load_planets().await.unwrap_err();
        assert!(matches!(err, RepositoryError::ParseError { .. }));
        assert!(err.is_data_unavailable());
        let details = err.context().details.as_deref().unwrap_or_default();
        assert!(details.contains("row 1"), "unexpected details: {}", details);
    }

    #[test]
    fn test_source_description() {
        let repo = CsvRepository::new("data/kepler_data.csv");
        assert_eq!(repo.source_description(), "csv:data/kepler_data.csv");
    }
}
