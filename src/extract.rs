//! Extractors — apply one recognizer family to a text.
//!
//! Temporal and location extraction keep only the first match per kind;
//! entity extraction scans the whole text for every kind. Results from
//! different kinds may overlap and are not de-duplicated.

use tracing::trace;

use crate::registry::PatternRegistry;
use crate::types::{EntityMatch, LocationMatch, TemporalMatch};

/// First temporal expression per kind, in order absolute, relative, date.
///
/// The value is the full matched text.
pub fn extract_temporal(registry: &PatternRegistry, text: &str) -> Vec<TemporalMatch> {
    registry
        .temporal_patterns()
        .into_iter()
        .filter_map(|(kind, pattern)| {
            pattern.find(text).map(|m| {
                trace!(%kind, value = m.as_str(), "temporal match");
                TemporalMatch {
                    kind,
                    value: m.as_str().to_string(),
                }
            })
        })
        .collect()
}

/// First location per kind, in order city, address.
///
/// The value is the captured name without the lead-in word.
pub fn extract_locations(registry: &PatternRegistry, text: &str) -> Vec<LocationMatch> {
    registry
        .location_patterns()
        .into_iter()
        .filter_map(|(kind, pattern)| {
            let name = pattern.captures(text)?.get(1)?;
            trace!(%kind, value = name.as_str(), "location match");
            Some(LocationMatch {
                kind,
                value: name.as_str().to_string(),
            })
        })
        .collect()
}

/// Every non-overlapping entity, grouped by kind (person, organization,
/// hashtag) and left to right within a kind.
pub fn extract_entities(registry: &PatternRegistry, text: &str) -> Vec<EntityMatch> {
    let mut results = Vec::new();

    for (kind, pattern) in registry.entity_patterns() {
        let mut cursor = Utf16Cursor::new(text);
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let offset = cursor.advance_to(whole.start());
            trace!(%kind, value = value.as_str(), offset, "entity match");
            results.push(EntityMatch {
                kind,
                value: value.as_str().to_string(),
                offset,
            });
        }
    }
    results
}

/// Converts increasing byte offsets into UTF-16 code unit offsets in one
/// pass, so positions line up with JavaScript string indices.
struct Utf16Cursor<'a> {
    text: &'a str,
    byte: usize,
    units: usize,
}

impl<'a> Utf16Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            units: 0,
        }
    }

    // `byte` must be a char boundary at or after the previous call.
    fn advance_to(&mut self, byte: usize) -> usize {
        self.units += self.text[self.byte..byte]
            .chars()
            .map(char::len_utf16)
            .sum::<usize>();
        self.byte = byte;
        self.units
    }
}
