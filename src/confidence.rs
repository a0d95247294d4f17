//! Confidence scoring from extraction coverage.

use crate::types::{EntityMatch, LocationMatch, TemporalMatch};

/// Score with nothing extracted.
pub const BASE_CONFIDENCE: f64 = 0.2;
pub const TEMPORAL_WEIGHT: f64 = 0.3;
pub const LOCATION_WEIGHT: f64 = 0.3;
pub const ENTITY_WEIGHT: f64 = 0.2;

/// Heuristic confidence in `[0.2, 1.0]`.
///
/// Each non-empty category adds its weight once, regardless of how many
/// matches it holds.
pub fn score(
    temporal: &[TemporalMatch],
    locations: &[LocationMatch],
    entities: &[EntityMatch],
) -> f64 {
    let mut total = BASE_CONFIDENCE;
    if !temporal.is_empty() {
        total += TEMPORAL_WEIGHT;
    }
    if !locations.is_empty() {
        total += LOCATION_WEIGHT;
    }
    if !entities.is_empty() {
        total += ENTITY_WEIGHT;
    }
    total.min(1.0)
}
