//! Dashboard chart data.

use crate::algorithms::{
    group_by_disposition, is_earth_like, is_habitable_strict, receives_earth_like_sunlight,
};
use crate::api::ChartsData;
use crate::db::{CatalogRepository, RepositoryResult};
use crate::models::PlanetRecord;

fn select(planets: &[PlanetRecord], predicate: fn(&PlanetRecord) -> bool) -> Vec<PlanetRecord> {
    planets.iter().filter(|p| predicate(p)).cloned().collect()
}

/// Classify every record and count dispositions. Subsets keep input order.
pub fn compute_chart_data(planets: Vec<PlanetRecord>) -> ChartsData {
    ChartsData {
        habitable_planets: select(&planets, is_habitable_strict),
        earth_like_planets: select(&planets, is_earth_like),
        receives_earth_like_sunlight: select(&planets, receives_earth_like_sunlight),
        planets_by_disposition: group_by_disposition(&planets),
        planets,
    }
}

pub async fn get_chart_data(repo: &dyn CatalogRepository) -> RepositoryResult<ChartsData> {
    let planets = repo.load_planets().await?;
    Ok(compute_chart_data(planets))
}
