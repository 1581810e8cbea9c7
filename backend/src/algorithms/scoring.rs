//! Habitability scoring.
//!
//! A score is the plain sum of five banded sub-scores; the best band of each
//! component wins and unknown measurements land in the lowest band.
//!
//! | Component   | Best              | Partial                 | Otherwise |
//! |-------------|-------------------|-------------------------|-----------|
//! | Radius      | 30 (0.8..=1.5)    | 15 (1.5 < r <= 2.5)     | 5         |
//! | Temperature | 25 (200..=320 K)  | 10 (150..=400 K)        | 0         |
//! | Insolation  | 20 (0.4..=1.5)    | 10 (0.2..=2.5)          | 0         |
//! | Period      | 10 (50..=500 d)   | 5 (10..=1000 d)         | 0         |
//! | Disposition | 10 (CONFIRMED)    | 5 (CANDIDATE)           | 0         |
//!
//! Totals therefore stay within `0..=100`.

use crate::models::{Disposition, PlanetRecord, ScoreBreakdown, ScoredPlanetRecord};

/// Upper bound of any score.
pub const MAX_SCORE: u8 = 100;

fn in_band(value: f64, lo: f64, hi: f64) -> bool {
    value >= lo && value <= hi
}

fn radius_score(prad: Option<f64>) -> u8 {
    match prad {
        Some(r) if in_band(r, 0.8, 1.5) => 30,
        Some(r) if r > 1.5 && r <= 2.5 => 15,
        _ => 5,
    }
}

fn temperature_score(teq: Option<f64>) -> u8 {
    match teq {
        Some(t) if in_band(t, 200.0, 320.0) => 25,
        Some(t) if in_band(t, 150.0, 400.0) => 10,
        _ => 0,
    }
}

fn insolation_score(insol: Option<f64>) -> u8 {
    match insol {
        Some(i) if in_band(i, 0.4, 1.5) => 20,
        Some(i) if in_band(i, 0.2, 2.5) => 10,
        _ => 0,
    }
}

fn period_score(period: Option<f64>) -> u8 {
    match period {
        Some(p) if in_band(p, 50.0, 500.0) => 10,
        Some(p) if in_band(p, 10.0, 1000.0) => 5,
        _ => 0,
    }
}

fn disposition_score(disposition: Option<&Disposition>) -> u8 {
    match disposition {
        Some(Disposition::Confirmed) => 10,
        Some(Disposition::Candidate) => 5,
        _ => 0,
    }
}

/// Component-wise score of a single record.
pub fn score_breakdown(planet: &PlanetRecord) -> ScoreBreakdown {
    ScoreBreakdown {
        radius: radius_score(planet.koi_prad),
        temperature: temperature_score(planet.koi_teq),
        insolation: insolation_score(planet.koi_insol),
        period: period_score(planet.koi_period),
        disposition: disposition_score(planet.koi_disposition.as_ref()),
    }
}

/// Habitability score of a single record, in `0..=100`.
pub fn score(planet: &PlanetRecord) -> u8 {
    score_breakdown(planet).total()
}

/// Score every record and order the result by descending score.
///
/// The sort is stable, so records with equal scores keep their input order.
pub fn score_all(planets: &[PlanetRecord]) -> Vec<ScoredPlanetRecord> {
    let mut scored: Vec<ScoredPlanetRecord> = planets
        .iter()
        .map(|planet| ScoredPlanetRecord {
            record: planet.clone(),
            score: score(planet),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
