//! Planet observation records from the Kepler Objects of Interest (KOI) table.
//!
//! Every measured attribute is an explicit `Option`: the catalog has plenty of
//! blank cells and a blank must stay "unknown". Reading it as `0.0` would make
//! a missing radius look like a tiny planet and skew every classification.

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// KOI vetting outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Disposition {
    Candidate,
    Confirmed,
    FalsePositive,
    /// Any non-canonical value found in the source, kept verbatim.
    Other(String),
}

impl Disposition {
    /// The three canonical dispositions, in aggregation order.
    pub const CANONICAL: [Disposition; 3] = [
        Disposition::Candidate,
        Disposition::Confirmed,
        Disposition::FalsePositive,
    ];

    /// Value as written in the KOI table.
    pub fn as_str(&self) -> &str {
        match self {
            Disposition::Candidate => "CANDIDATE",
            Disposition::Confirmed => "CONFIRMED",
            Disposition::FalsePositive => "FALSE POSITIVE",
            Disposition::Other(raw) => raw.as_str(),
        }
    }

    /// Human-readable label used for chart buckets.
    pub fn label(&self) -> &str {
        match self {
            Disposition::Candidate => "Candidate",
            Disposition::Confirmed => "Confirmed",
            Disposition::FalsePositive => "False Positive",
            Disposition::Other(raw) => raw.as_str(),
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Disposition::Other(_))
    }

    /// Parse one of the canonical values, rejecting anything else.
    ///
    /// Used for caller-supplied filters where an unknown value is a mistake
    /// rather than data to preserve.
    pub fn parse_canonical(s: &str) -> Option<Self> {
        match s.parse::<Disposition>() {
            Ok(Disposition::Other(_)) | Err(_) => None,
            Ok(d) => Some(d),
        }
    }
}

impl FromStr for Disposition {
    type Err = String;

    /// Exact match on the KOI spelling; `Confirmed` or `confirmed` are kept
    /// as [`Disposition::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "" => Err("empty disposition".to_string()),
            "CANDIDATE" => Ok(Self::Candidate),
            "CONFIRMED" => Ok(Self::Confirmed),
            "FALSE POSITIVE" | "FALSE_POSITIVE" => Ok(Self::FalsePositive),
            _ => Ok(Self::Other(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Disposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Disposition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One row of the KOI table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// KOI catalog identifier, e.g. `K00701.04`.
    #[serde(default)]
    pub kepoi_name: String,
    /// Confirmed Kepler name, only present once a planet is confirmed.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub kepler_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_disposition")]
    pub koi_disposition: Option<Disposition>,
    /// Planetary radius in Earth radii.
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub koi_prad: Option<f64>,
    /// Equilibrium temperature in Kelvin.
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub koi_teq: Option<f64>,
    /// Insolation flux in Earth flux units.
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub koi_insol: Option<f64>,
    /// Orbital period in days.
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub koi_period: Option<f64>,
    /// Stellar effective temperature in Kelvin.
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub koi_steff: Option<f64>,
    /// Stellar radius in solar radii.
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub koi_srad: Option<f64>,
}

impl PlanetRecord {
    /// Create a record with only its KOI identifier set.
    pub fn new(kepoi_name: impl Into<String>) -> Self {
        Self {
            kepoi_name: kepoi_name.into(),
            ..Default::default()
        }
    }

    pub fn with_kepler_name(mut self, name: impl Into<String>) -> Self {
        self.kepler_name = Some(name.into());
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.koi_disposition = Some(disposition);
        self
    }

    pub fn with_radius(mut self, earth_radii: f64) -> Self {
        self.koi_prad = Some(earth_radii);
        self
    }

    pub fn with_temperature(mut self, kelvin: f64) -> Self {
        self.koi_teq = Some(kelvin);
        self
    }

    pub fn with_insolation(mut self, earth_flux: f64) -> Self {
        self.koi_insol = Some(earth_flux);
        self
    }

    pub fn with_period(mut self, days: f64) -> Self {
        self.koi_period = Some(days);
        self
    }

    pub fn with_stellar_temperature(mut self, kelvin: f64) -> Self {
        self.koi_steff = Some(kelvin);
        self
    }

    pub fn with_stellar_radius(mut self, solar_radii: f64) -> Self {
        self.koi_srad = Some(solar_radii);
        self
    }

    pub fn is_confirmed(&self) -> bool {
        self.koi_disposition == Some(Disposition::Confirmed)
    }
}

/// A record paired with its habitability score.
///
/// Derived projection; the source record is cloned, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlanetRecord {
    #[serde(flatten)]
    pub record: PlanetRecord,
    /// Habitability score in `0..=100`.
    pub score: u8,
}

/// Per-component contribution to a habitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub radius: u8,
    pub temperature: u8,
    pub insolation: u8,
    pub period: u8,
    pub disposition: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.radius + self.temperature + self.insolation + self.period + self.disposition
    }
}

/// Number of records carrying one canonical disposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispositionBucket {
    pub name: String,
    pub count: usize,
}

// =========================================================
// Lenient field deserializers
// =========================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Numeric cell: blank, unparsable or non-finite values become `None`.
fn deserialize_measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMeasurement>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawMeasurement::Number(v)) => Some(v),
        Some(RawMeasurement::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(RawMeasurement::Other(_)) | None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn deserialize_disposition<'de, D>(deserializer: D) -> Result<Option<Disposition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_parsing() {
        assert_eq!("CONFIRMED".parse::<Disposition>(), Ok(Disposition::Confirmed));
        assert_eq!(" CANDIDATE ".parse::<Disposition>(), Ok(Disposition::Candidate));
        assert_eq!(
            "FALSE POSITIVE".parse::<Disposition>(),
            Ok(Disposition::FalsePositive)
        );
        assert_eq!(
            "FALSE_POSITIVE".parse::<Disposition>(),
            Ok(Disposition::FalsePositive)
        );
        assert_eq!(
            "NOT DISPOSITIONED".parse::<Disposition>(),
            Ok(Disposition::Other("NOT DISPOSITIONED".to_string()))
        );
        assert!("  ".parse::<Disposition>().is_err());
    }

    #[test]
    fn test_miscased_disposition_stays_other() {
        for raw in ["Confirmed", "confirmed", "Candidate", "false positive"] {
            assert_eq!(
                raw.parse::<Disposition>(),
                Ok(Disposition::Other(raw.to_string()))
            );
        }

        let record: PlanetRecord = serde_json::from_str(
            r#"{"kepoi_name": "K1", "koi_disposition": "Confirmed", "koi_prad": 1.2}"#,
        )
        .unwrap();
        assert!(!record.is_confirmed());
        assert_eq!(
            record.koi_disposition,
            Some(Disposition::Other("Confirmed".to_string()))
        );
    }

    #[test]
    fn test_parse_canonical_rejects_other() {
        assert_eq!(
            Disposition::parse_canonical("CONFIRMED"),
            Some(Disposition::Confirmed)
        );
        assert_eq!(Disposition::parse_canonical("confirmed"), None);
        assert_eq!(Disposition::parse_canonical("MAYBE"), None);
        assert_eq!(Disposition::parse_canonical(""), None);
    }

    #[test]
    fn test_missing_numbers_stay_unknown() {
        let json = r#"{
            "kepoi_name": "K00001.01",
            "kepler_name": "",
            "koi_disposition": "CONFIRMED",
            "koi_prad": "",
            "koi_teq": "n/a",
            "koi_insol": "0.9",
            "koi_period": 200
        }"#;
        let record: PlanetRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.kepler_name, None);
        assert_eq!(record.koi_prad, None);
        assert_eq!(record.koi_teq, None);
        assert_eq!(record.koi_insol, Some(0.9));
        assert_eq!(record.koi_period, Some(200.0));
        assert_eq!(record.koi_steff, None);
        assert!(record.is_confirmed());
    }

    #[test]
    fn test_non_finite_is_unknown() {
        let record: PlanetRecord =
            serde_json::from_str(r#"{"kepoi_name": "K1", "koi_prad": "NaN", "koi_teq": "inf"}"#)
                .unwrap();
        assert_eq!(record.koi_prad, None);
        assert_eq!(record.koi_teq, None);
    }

    #[test]
    fn test_scored_record_serializes_flat() {
        let scored = ScoredPlanetRecord {
            record: PlanetRecord::new("K00002.01").with_disposition(Disposition::FalsePositive),
            score: 42,
        };
        let value = serde_json::to_value(&scored).unwrap();

        assert_eq!(value["kepoi_name"], "K00002.01");
        assert_eq!(value["koi_disposition"], "FALSE POSITIVE");
        assert_eq!(value["score"], 42);
        assert!(value.get("record").is_none());
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = ScoreBreakdown {
            radius: 30,
            temperature: 25,
            insolation: 20,
            period: 10,
            disposition: 10,
        };
        assert_eq!(breakdown.total(), 95);
    }
}
