//! Record filters used by the catalog explorer.
//!
//! The primitives are plain predicates; [`PlanetFilter`] AND-composes them and
//! treats every unset criterion as "match everything".

use serde::{Deserialize, Serialize};

use crate::models::{Disposition, PlanetRecord};

/// Errors raised while building a filter from caller input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid range for {field}: lower bound {lo} is greater than upper bound {hi}")]
    InvertedRange { field: String, lo: f64, hi: f64 },

    #[error("invalid range for {field}: bounds must be finite numbers")]
    NonFiniteBound { field: String },

    #[error("incomplete range for {field}: both a minimum and a maximum are required")]
    HalfOpenRange { field: String },

    #[error("unknown disposition '{0}': expected CANDIDATE, CONFIRMED or FALSE POSITIVE")]
    UnknownDisposition(String),
}

/// Closed numeric interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    /// Build a range, checking that both bounds are finite and ordered.
    pub fn new(field: &str, lo: f64, hi: f64) -> Result<Self, FilterError> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(FilterError::NonFiniteBound {
                field: field.to_string(),
            });
        }
        if lo > hi {
            return Err(FilterError::InvertedRange {
                field: field.to_string(),
                lo,
                hi,
            });
        }
        Ok(Self { lo, hi })
    }

    /// Build an optional range from optional bounds; only both-or-neither is valid.
    pub fn from_bounds(
        field: &str,
        lo: Option<f64>,
        hi: Option<f64>,
    ) -> Result<Option<Self>, FilterError> {
        match (lo, hi) {
            (None, None) => Ok(None),
            (Some(lo), Some(hi)) => Self::new(field, lo, hi).map(Some),
            _ => Err(FilterError::HalfOpenRange {
                field: field.to_string(),
            }),
        }
    }
}

/// Inclusive at both ends; an unknown value never matches.
pub fn matches_range(range: &Range, value: Option<f64>) -> bool {
    value.is_some_and(|v| v >= range.lo && v <= range.hi)
}

/// Case-insensitive substring test, both sides trimmed first.
pub fn matches_text(needle: &str, haystack: Option<&str>) -> bool {
    let needle = needle.trim().to_lowercase();
    haystack.is_some_and(|h| h.trim().to_lowercase().contains(&needle))
}

/// Strict equality on the disposition.
pub fn matches_exact(target: &Disposition, value: Option<&Disposition>) -> bool {
    value == Some(target)
}

/// Conjunction of optional criteria over a planet record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetFilter {
    /// Matched against `kepler_name`.
    pub search: Option<String>,
    pub radius: Option<Range>,
    pub temperature: Option<Range>,
    pub insolation: Option<Range>,
    pub disposition: Option<Disposition>,
}

impl PlanetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name search; blank text leaves the search unset.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    pub fn with_radius(mut self, range: Range) -> Self {
        self.radius = Some(range);
        self
    }

    pub fn with_temperature(mut self, range: Range) -> Self {
        self.temperature = Some(range);
        self
    }

    pub fn with_insolation(mut self, range: Range) -> Self {
        self.insolation = Some(range);
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.radius.is_none()
            && self.temperature.is_none()
            && self.insolation.is_none()
            && self.disposition.is_none()
    }

    pub fn matches(&self, planet: &PlanetRecord) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .map_or(true, |s| matches_text(s, planet.kepler_name.as_deref()));
        let radius_ok = self
            .radius
            .as_ref()
            .map_or(true, |r| matches_range(r, planet.koi_prad));
        let temperature_ok = self
            .temperature
            .as_ref()
            .map_or(true, |r| matches_range(r, planet.koi_teq));
        let insolation_ok = self
            .insolation
            .as_ref()
            .map_or(true, |r| matches_range(r, planet.koi_insol));
        let disposition_ok = self
            .disposition
            .as_ref()
            .map_or(true, |d| matches_exact(d, planet.koi_disposition.as_ref()));

        search_ok && radius_ok && temperature_ok && insolation_ok && disposition_ok
    }

    /// Matching records, in input order.
    pub fn apply(&self, planets: &[PlanetRecord]) -> Vec<PlanetRecord> {
        if self.is_empty() {
            return planets.to_vec();
        }
        planets.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: f64, hi: f64) -> Range {
        Range::new("test", lo, hi).unwrap()
    }

    #[test]
    fn test_range_inclusive_at_both_ends() {
        let r = range(1.0, 2.0);
        assert!(matches_range(&r, Some(1.0)));
        assert!(matches_range(&r, Some(2.0)));
        assert!(matches_range(&r, Some(1.5)));
        assert!(!matches_range(&r, Some(2.01)));
        assert!(!matches_range(&r, None));
    }

    #[test]
    fn test_range_validation() {
        assert!(matches!(
            Range::new("radius", 3.0, 1.0),
            Err(FilterError::InvertedRange { .. })
        ));
        assert!(matches!(
            Range::new("radius", f64::NAN, 1.0),
            Err(FilterError::NonFiniteBound { .. })
        ));
        assert_eq!(Range::from_bounds("radius", None, None), Ok(None));
        assert!(matches!(
            Range::from_bounds("radius", Some(1.0), None),
            Err(FilterError::HalfOpenRange { .. })
        ));
    }

    #[test]
    fn test_text_match_trims_and_ignores_case() {
        assert!(matches_text("  kepler-22 ", Some("Kepler-22 b")));
        assert!(matches_text("B", Some("Kepler-22 b")));
        assert!(!matches_text("kepler-23", Some("Kepler-22 b")));
        assert!(!matches_text("kepler", None));
    }

    #[test]
    fn test_exact_match() {
        assert!(matches_exact(&Disposition::Confirmed, Some(&Disposition::Confirmed)));
        assert!(!matches_exact(&Disposition::Confirmed, Some(&Disposition::Candidate)));
        assert!(!matches_exact(&Disposition::Confirmed, None));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let planets = vec![PlanetRecord::new("a"), PlanetRecord::new("b")];
        let filter = PlanetFilter::new().with_search("   ");

        assert!(filter.is_empty());
        assert_eq!(filter.apply(&planets), planets);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let planets = vec![
            PlanetRecord::new("K1")
                .with_kepler_name("Kepler-22 b")
                .with_disposition(Disposition::Confirmed)
                .with_radius(2.4),
            PlanetRecord::new("K2")
                .with_kepler_name("Kepler-62 f")
                .with_disposition(Disposition::Confirmed)
                .with_radius(1.4),
            PlanetRecord::new("K3")
                .with_disposition(Disposition::Candidate)
                .with_radius(1.0),
        ];

        let filter = PlanetFilter::new()
            .with_search("kepler")
            .with_radius(range(1.0, 2.0));
        let result = filter.apply(&planets);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kepoi_name, "K2");

        let filter = PlanetFilter::new().with_disposition(Disposition::Candidate);
        let result = filter.apply(&planets);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kepoi_name, "K3");
    }

    #[test]
    fn test_search_skips_unnamed_planets() {
        let planets = vec![PlanetRecord::new("K00001.01")];
        let filter = PlanetFilter::new().with_search("K00001");
        assert!(filter.apply(&planets).is_empty());
    }
}
