//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use super::dto::{
    ChartsData, ExploreQuery, ExplorerData, HabitabilityCheck, HabitabilityData, HealthResponse,
    PlanetsData, RefreshResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the planet data is reachable, plus cache metadata.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let catalog = match state.repository.health_check().await {
        Ok(true) => "available".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_source: state.repository.source_description(),
        catalog,
        cache: state.repository.cache_status(),
    }))
}

// =============================================================================
// Catalog Endpoints
// =============================================================================

/// GET /v1/planets
///
/// Every record of the catalog.
pub async fn list_planets(State(state): State<AppState>) -> HandlerResult<PlanetsData> {
    let data = services::list_planets(state.repository.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/planets/habitable
///
/// Planets ranked by habitability score plus the strictly habitable subset.
pub async fn get_habitable_planets(
    State(state): State<AppState>,
) -> HandlerResult<HabitabilityData> {
    let data = services::get_habitability_data(state.repository.as_ref()).await?;
    tracing::debug!(
        planets = data.planets.len(),
        habitable = data.habitable_planets.len(),
        "Computed habitability ranking"
    );
    Ok(Json(data))
}

/// GET /v1/planets/charts
///
/// Classified subsets and disposition counts for the dashboard.
pub async fn get_charts(State(state): State<AppState>) -> HandlerResult<ChartsData> {
    let data = services::get_chart_data(state.repository.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/planets/explore
///
/// Filtered and paginated catalog browsing.
pub async fn explore_planets(
    State(state): State<AppState>,
    query: Result<Query<ExploreQuery>, QueryRejection>,
) -> HandlerResult<ExplorerData> {
    let Query(query) = query?;
    let filter = query.to_filter()?;
    let (page, per_page) = query
        .page_request(&state.explorer)
        .map_err(AppError::BadRequest)?;

    let data =
        services::get_explorer_data(state.repository.as_ref(), &filter, page, per_page).await?;
    Ok(Json(data))
}

/// GET /v1/planets/{kepoi_name}/habitability
///
/// Run every classifier against a single planet.
pub async fn check_planet_habitability(
    State(state): State<AppState>,
    Path(kepoi_name): Path<String>,
) -> HandlerResult<HabitabilityCheck> {
    if kepoi_name.trim().is_empty() {
        return Err(AppError::BadRequest("KOI name must not be empty".to_string()));
    }
    let check = services::get_habitability_check(state.repository.as_ref(), &kepoi_name).await?;
    Ok(Json(check))
}

// =============================================================================
// Cache Management
// =============================================================================

/// POST /v1/catalog/refresh
///
/// Drop any cached collection so the next request reads the source again.
pub async fn refresh_catalog(State(state): State<AppState>) -> HandlerResult<RefreshResponse> {
    let invalidated = state.repository.invalidate();
    tracing::info!(invalidated, "Catalog refresh requested");
    Ok(Json(RefreshResponse { invalidated }))
}
