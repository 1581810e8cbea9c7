//! Disposition aggregation for the catalog charts.

use crate::models::{Disposition, DispositionBucket, PlanetRecord};

/// Count records per canonical disposition.
///
/// Buckets always come back in the order Candidate, Confirmed, False Positive,
/// including empty ones. Records without a disposition, or with a
/// non-canonical one, are left out of every bucket.
pub fn group_by_disposition(planets: &[PlanetRecord]) -> Vec<DispositionBucket> {
    let mut counts = [0usize; 3];

    for planet in planets {
        let slot = match planet.koi_disposition {
            Some(Disposition::Candidate) => 0,
            Some(Disposition::Confirmed) => 1,
            Some(Disposition::FalsePositive) => 2,
            _ => continue,
        };
        counts[slot] += 1;
    }

    Disposition::CANONICAL
        .iter()
        .zip(counts)
        .map(|(disposition, count)| DispositionBucket {
            name: disposition.label().to_string(),
            count,
        })
        .collect()
}
