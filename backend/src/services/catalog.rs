//! Full catalog listing.

use crate::api::PlanetsData;
use crate::db::{CatalogRepository, RepositoryResult};

/// All records, untouched and in source order.
pub async fn list_planets(repo: &dyn CatalogRepository) -> RepositoryResult<PlanetsData> {
    let planets = repo.load_planets().await?;
    Ok(PlanetsData { planets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalRepository;
    use crate::models::PlanetRecord;

    #[tokio::test]
    async fn test_list_planets_keeps_order() {
        let repo = LocalRepository::with_planets(vec![
            PlanetRecord::new("K2"),
            PlanetRecord::new("K1"),
        ]);

        let data = list_planets(&repo).await.unwrap();
        let names: Vec<&str> = data.planets.iter().map(|p| p.kepoi_name.as_str()).collect();
        assert_eq!(names, vec!["K2", "K1"]);
    }
}
