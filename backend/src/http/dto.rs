//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies for the catalog endpoints are the service types from
//! [`crate::api`]; this module adds the request/query types and the small
//! transport-only responses.

use serde::{Deserialize, Serialize};

use crate::config::ExplorerSettings;
use crate::db::CacheStatus;
use crate::models::Disposition;
use crate::transformations::{FilterError, PlanetFilter, Range};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    ChartsData, ExplorerData, HabitabilityCheck, HabitabilityData, PlanetsData,
};

/// Query parameters for the explorer endpoint.
///
/// Ranges need both bounds or neither. `limit` and `batches` are the grid
/// view's "first N records" shortcuts and override `page`/`per_page`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExploreQuery {
    /// Case-insensitive Kepler name search
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub radius_min: Option<f64>,
    #[serde(default)]
    pub radius_max: Option<f64>,
    #[serde(default)]
    pub temperature_min: Option<f64>,
    #[serde(default)]
    pub temperature_max: Option<f64>,
    #[serde(default)]
    pub insolation_min: Option<f64>,
    #[serde(default)]
    pub insolation_max: Option<f64>,
    /// CANDIDATE, CONFIRMED or FALSE POSITIVE
    #[serde(default)]
    pub disposition: Option<String>,
    /// 1-based page number (default: 1)
    #[serde(default)]
    pub page: Option<usize>,
    /// Records per page (default: configured page size)
    #[serde(default)]
    pub per_page: Option<usize>,
    /// First N records, for the grid view
    #[serde(default)]
    pub limit: Option<usize>,
    /// Grid "load more" steps taken; serves `batches * grid_batch` records
    #[serde(default)]
    pub batches: Option<usize>,
}

impl ExploreQuery {
    /// Build the record filter described by this query.
    pub fn to_filter(&self) -> Result<PlanetFilter, FilterError> {
        let mut filter = PlanetFilter::new();

        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }
        filter.radius = Range::from_bounds("radius", self.radius_min, self.radius_max)?;
        filter.temperature =
            Range::from_bounds("temperature", self.temperature_min, self.temperature_max)?;
        filter.insolation =
            Range::from_bounds("insolation", self.insolation_min, self.insolation_max)?;

        if let Some(raw) = self.disposition.as_deref().filter(|d| !d.trim().is_empty()) {
            // Query input is case-insensitive; stored values are not.
            let disposition = Disposition::parse_canonical(&raw.trim().to_uppercase())
                .ok_or_else(|| FilterError::UnknownDisposition(raw.to_string()))?;
            filter = filter.with_disposition(disposition);
        }

        Ok(filter)
    }

    /// Resolve `(page, per_page)` against the configured limits.
    pub fn page_request(&self, settings: &ExplorerSettings) -> Result<(usize, usize), String> {
        let (page, per_page) = match (self.limit, self.batches) {
            (Some(limit), _) => (1, limit),
            (None, Some(batches)) => (1, batches.saturating_mul(settings.grid_batch)),
            (None, None) => (
                self.page.unwrap_or(1),
                self.per_page.unwrap_or(settings.page_size),
            ),
        };

        if per_page == 0 || per_page > settings.max_page_size {
            return Err(format!(
                "page size must be between 1 and {}, got {}",
                settings.max_page_size, per_page
            ));
        }
        Ok((page, per_page))
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Where planet data is read from
    pub data_source: String,
    /// Whether the planet data is currently reachable
    pub catalog: String,
    /// Snapshot metadata when caching is enabled and warm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStatus>,
}

/// Response for catalog cache invalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Whether a cached collection was dropped
    pub invalidated: bool,
}
