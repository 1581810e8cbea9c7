//! Habitability ranking and the per-planet habitability check.

use crate::algorithms::{
    is_earth_like, is_habitable_strict, is_habitable_ui, receives_earth_like_sunlight,
    score_all, score_breakdown,
};
use crate::api::{HabitabilityCheck, HabitabilityData};
use crate::db::{CatalogRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::PlanetRecord;

/// Score and rank every record and pick out the strictly habitable ones.
pub fn compute_habitability_data(planets: &[PlanetRecord]) -> HabitabilityData {
    let habitable_planets = planets
        .iter()
        .filter(|p| is_habitable_strict(p))
        .cloned()
        .collect();

    HabitabilityData {
        planets: score_all(planets),
        habitable_planets,
    }
}

/// Evaluate one record against every classifier.
pub fn evaluate_planet(planet: &PlanetRecord) -> HabitabilityCheck {
    let breakdown = score_breakdown(planet);
    HabitabilityCheck {
        kepoi_name: planet.kepoi_name.clone(),
        kepler_name: planet.kepler_name.clone(),
        habitable: is_habitable_ui(planet),
        habitable_strict: is_habitable_strict(planet),
        earth_like: is_earth_like(planet),
        receives_earth_like_sunlight: receives_earth_like_sunlight(planet),
        score: breakdown.total(),
        breakdown,
    }
}

/// Find a record by KOI name (case-insensitive) and evaluate it.
pub fn check_habitability(planets: &[PlanetRecord], kepoi_name: &str) -> Option<HabitabilityCheck> {
    let wanted = kepoi_name.trim();
    planets
        .iter()
        .find(|p| p.kepoi_name.eq_ignore_ascii_case(wanted))
        .map(evaluate_planet)
}

pub async fn get_habitability_data(
    repo: &dyn CatalogRepository,
) -> RepositoryResult<HabitabilityData> {
    let planets = repo.load_planets().await?;
    Ok(compute_habitability_data(&planets))
}

pub async fn get_habitability_check(
    repo: &dyn CatalogRepository,
    kepoi_name: &str,
) -> RepositoryResult<HabitabilityCheck> {
    let planets = repo.load_planets().await?;
    check_habitability(&planets, kepoi_name).ok_or_else(|| RepositoryError::NotFound {
        message: format!("No planet with KOI name {}", kepoi_name),
        context: ErrorContext::new("check_habitability").with_source(repo.source_description()),
    })
}
