//! Checksums identifying a loaded planet collection.

use sha2::{Digest, Sha256};

use super::repository::{RepositoryError, RepositoryResult};
use crate::models::PlanetRecord;

/// Calculate the SHA-256 checksum of raw content.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Checksum of a planet collection, computed over its JSON form.
///
/// Two loads yielding the same records in the same order share a checksum,
/// whatever the formatting of the source file was.
pub fn calculate_planets_checksum(planets: &[PlanetRecord]) -> RepositoryResult<String> {
    let json = serde_json::to_vec(planets)
        .map_err(|e| RepositoryError::internal(format!("Failed to serialize planets: {}", e)))?;
    Ok(calculate_checksum(&json))
}
