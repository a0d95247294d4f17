//! Pattern-based event analysis for short social posts.
//!
//! Turns a text into a structured event record:
//! 1. Event type (keyword tally over a fixed table)
//! 2. Temporal expressions and locations (first match per recognizer)
//! 3. Named entities: mentions, organizations, hashtags (all matches)
//! 4. Heuristic confidence from extraction coverage
//!
//! ```
//! use event_analyzer_core::{analyze, EventType};
//!
//! let result = analyze("Protest in Boston today #march");
//! assert_eq!(result.event_type(), EventType::Gathering);
//! assert_eq!(result.summary(), "Type: Gathering | Time: today | Location: Boston | Entities: hashtag: march");
//! ```

mod analyzer;
mod classify;
mod confidence;
mod error;
mod extract;
mod ontology;
mod registry;
mod report;
mod types;

#[cfg(feature = "python")]
mod python;

pub use analyzer::{analyze, EventAnalyzer};
pub use classify::{classify, keyword_tally};
pub use confidence::{score, BASE_CONFIDENCE, ENTITY_WEIGHT, LOCATION_WEIGHT, TEMPORAL_WEIGHT};
pub use error::{Error, Result};
pub use extract::{extract_entities, extract_locations, extract_temporal};
pub use ontology::Ontology;
pub use registry::{KeywordList, PatternRegistry, RegistryConfig};
pub use report::AnalysisReport;
pub use types::{
    AnalysisResult, EntityKind, EntityMatch, EventType, LocationKind, LocationMatch, Relation,
    Severity, TemporalKind, TemporalMatch,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Native event analyzer module for Python.
#[cfg(feature = "python")]
#[pymodule]
fn event_analyzer_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Full analysis
    m.add_function(wrap_pyfunction!(python::analyze_event, m)?)?;
    m.add_function(wrap_pyfunction!(python::event_summary, m)?)?;
    m.add_function(wrap_pyfunction!(python::confidence_score, m)?)?;

    // Individual stages
    m.add_function(wrap_pyfunction!(python::classify_event_type, m)?)?;
    m.add_function(wrap_pyfunction!(python::extract_temporal, m)?)?;
    m.add_function(wrap_pyfunction!(python::extract_locations, m)?)?;
    m.add_function(wrap_pyfunction!(python::extract_entities, m)?)?;

    Ok(())
}
