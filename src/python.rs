//! Python bindings, built with the `python` feature.
//!
//! Every function uses the built-in registry.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::analyzer;
use crate::classify::classify;
use crate::extract;
use crate::registry::PatternRegistry;

/// Analyze text and return the display report as pretty-printed JSON.
///
/// The report carries the result fields plus a percentage ``confidence``
/// string and a one-line ``summary``.
#[pyfunction]
pub fn analyze_event(text: &str) -> PyResult<String> {
    analyzer::analyze(text)
        .report()
        .to_json_pretty()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Classify the dominant event type.
///
/// Returns one of: "Incident", "Gathering", "Announcement", "Crisis".
#[pyfunction]
pub fn classify_event_type(text: &str) -> String {
    classify(PatternRegistry::global(), text).to_string()
}

/// Temporal expressions as ``(kind, value)`` tuples, first match per kind.
#[pyfunction]
pub fn extract_temporal(text: &str) -> Vec<(String, String)> {
    extract::extract_temporal(PatternRegistry::global(), text)
        .into_iter()
        .map(|m| (m.kind.to_string(), m.value))
        .collect()
}

/// Locations as ``(kind, value)`` tuples, first match per kind.
#[pyfunction]
pub fn extract_locations(text: &str) -> Vec<(String, String)> {
    extract::extract_locations(PatternRegistry::global(), text)
        .into_iter()
        .map(|m| (m.kind.to_string(), m.value))
        .collect()
}

/// Entities as ``(kind, value, utf16_offset)`` tuples, all matches.
#[pyfunction]
pub fn extract_entities(text: &str) -> Vec<(String, String, usize)> {
    extract::extract_entities(PatternRegistry::global(), text)
        .into_iter()
        .map(|m| (m.kind.to_string(), m.value, m.offset))
        .collect()
}

/// Heuristic confidence in ``[0.2, 1.0]``.
#[pyfunction]
pub fn confidence_score(text: &str) -> f64 {
    analyzer::analyze(text).confidence()
}

/// Pipe-separated one-line summary of the analysis.
#[pyfunction]
pub fn event_summary(text: &str) -> String {
    analyzer::analyze(text).summary()
}
