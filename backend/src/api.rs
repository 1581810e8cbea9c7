//! Public API surface for the catalog service.
//!
//! This file consolidates the response types returned by the service layer
//! and serialized by the HTTP API.

pub use crate::models::{
    Disposition, DispositionBucket, PlanetRecord, ScoreBreakdown, ScoredPlanetRecord,
};
pub use crate::transformations::{Page, PlanetFilter, Range};

use serde::{Deserialize, Serialize};

/// Every record of the catalog, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetsData {
    pub planets: Vec<PlanetRecord>,
}

/// Scored ranking plus the strictly habitable subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitabilityData {
    /// All records, highest score first; equal scores keep source order.
    pub planets: Vec<ScoredPlanetRecord>,
    /// Records passing the strict habitability rule, in source order.
    pub habitable_planets: Vec<PlanetRecord>,
}

/// Classified subsets and disposition counts for the dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartsData {
    pub planets: Vec<PlanetRecord>,
    pub habitable_planets: Vec<PlanetRecord>,
    pub earth_like_planets: Vec<PlanetRecord>,
    pub receives_earth_like_sunlight: Vec<PlanetRecord>,
    pub planets_by_disposition: Vec<DispositionBucket>,
}

/// Outcome of the per-planet habitability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitabilityCheck {
    pub kepoi_name: String,
    pub kepler_name: Option<String>,
    /// Card-check rule: strict rule plus a temperature bound when known.
    pub habitable: bool,
    /// Rule used by the habitable listing and the charts.
    pub habitable_strict: bool,
    pub earth_like: bool,
    pub receives_earth_like_sunlight: bool,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// One page of filtered explorer results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerData {
    #[serde(flatten)]
    pub page: Page<PlanetRecord>,
    /// Filter that produced this page, echoed back.
    pub filter: PlanetFilter,
}
