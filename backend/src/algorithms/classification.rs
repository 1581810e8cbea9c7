//! Habitability classifiers over KOI records.
//!
//! All predicates are total: an unknown measurement fails whatever bound it
//! is tested against.
//!
//! Two habitability rules exist and are kept apart on purpose:
//!
//! * [`is_habitable_strict`] backs the habitable-planet listing and the charts.
//! * [`is_habitable_ui`] backs the per-planet "check habitability" action and
//!   additionally bounds the equilibrium temperature when it is known.

use crate::models::{Disposition, PlanetRecord};

/// Open insolation band of the conservative habitable zone, in Earth flux.
const HZ_INSOLATION: (f64, f64) = (0.36, 1.11);

/// Upper radius bound (exclusive) for a probably rocky planet, in Earth radii.
const ROCKY_RADIUS_MAX: f64 = 1.6;

/// Open equilibrium-temperature band applied by the UI check, in Kelvin.
const UI_TEMPERATURE: (f64, f64) = (180.0, 310.0);

/// Closed Earth-like radius band, in Earth radii.
const EARTH_RADIUS: (f64, f64) = (0.8, 1.5);

fn within_open(value: Option<f64>, (lo, hi): (f64, f64)) -> bool {
    value.is_some_and(|v| v > lo && v < hi)
}

fn within_closed(value: Option<f64>, (lo, hi): (f64, f64)) -> bool {
    value.is_some_and(|v| v >= lo && v <= hi)
}

/// Confirmed planet, `0.36 < insol < 1.11` and `prad < 1.6`.
pub fn is_habitable_strict(planet: &PlanetRecord) -> bool {
    planet.koi_disposition == Some(Disposition::Confirmed)
        && within_open(planet.koi_insol, HZ_INSOLATION)
        && planet.koi_prad.is_some_and(|r| r < ROCKY_RADIUS_MAX)
}

/// Strict rule plus `180 < teq < 310`; a missing temperature passes.
pub fn is_habitable_ui(planet: &PlanetRecord) -> bool {
    is_habitable_strict(planet)
        && planet
            .koi_teq
            .map_or(true, |t| t > UI_TEMPERATURE.0 && t < UI_TEMPERATURE.1)
}

/// `0.8 <= prad <= 1.5` and `200 <= teq <= 350`.
pub fn is_earth_like(planet: &PlanetRecord) -> bool {
    within_closed(planet.koi_prad, EARTH_RADIUS) && within_closed(planet.koi_teq, (200.0, 350.0))
}

/// `0.8 <= prad <= 1.5` and `0.4 <= insol <= 1.6`.
pub fn receives_earth_like_sunlight(planet: &PlanetRecord) -> bool {
    within_closed(planet.koi_prad, EARTH_RADIUS) && within_closed(planet.koi_insol, (0.4, 1.6))
}
