use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::PlanetRecord;

/// Comment marker used by the NASA Exoplanet Archive CSV export.
const COMMENT_CHAR: u8 = b'#';

/// Parse KOI records from any CSV source.
///
/// The first non-comment line is the header. Columns are matched by name and
/// unknown columns are ignored, so full archive exports load as-is.
pub fn parse_planets_reader<R: Read>(reader: R) -> Result<Vec<PlanetRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(COMMENT_CHAR))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    if !headers.iter().any(|h| h == "kepoi_name") {
        log::warn!("CSV header has no 'kepoi_name' column; records will be unnamed");
    }

    let mut planets = Vec::new();
    for (row, result) in csv_reader.deserialize::<PlanetRecord>().enumerate() {
        let planet = result.with_context(|| format!("Malformed planet record at row {}", row + 1))?;
        planets.push(planet);
    }

    log::debug!("Parsed {} planet records", planets.len());
    Ok(planets)
}

/// Parse KOI records from CSV text.
pub fn parse_planets_csv_str(content: &str) -> Result<Vec<PlanetRecord>> {
    parse_planets_reader(content.as_bytes())
}

/// Parse KOI records from a CSV file on disk.
pub fn parse_planets_csv(csv_path: &Path) -> Result<Vec<PlanetRecord>> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open planet data file {}", csv_path.display()))?;
    parse_planets_reader(file)
        .with_context(|| format!("Failed to parse planet data file {}", csv_path.display()))
}
