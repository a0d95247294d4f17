//! Analyzer façade — one call from raw text to an [`AnalysisResult`].

use tracing::debug;

use crate::classify::classify;
use crate::confidence;
use crate::extract::{extract_entities, extract_locations, extract_temporal};
use crate::registry::PatternRegistry;
use crate::types::AnalysisResult;

/// Stateless analyzer bound to a read-only registry.
///
/// Cheap to copy; any number of analyzers may share one registry across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct EventAnalyzer<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> EventAnalyzer<'r> {
    pub fn with_registry(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r PatternRegistry {
        self.registry
    }

    /// Analyze `text`. Never fails; empty input yields empty extractions,
    /// `Incident`, and the base confidence.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let event_type = classify(self.registry, text);
        let time = extract_temporal(self.registry, text);
        let place = extract_locations(self.registry, text);
        let entities = extract_entities(self.registry, text);
        let confidence = confidence::score(&time, &place, &entities);

        debug!(
            %event_type,
            temporal = time.len(),
            locations = place.len(),
            entities = entities.len(),
            confidence,
            "analyzed text"
        );

        AnalysisResult::new(text, event_type, time, place, entities, confidence)
    }

    /// Same as [`analyze`](Self::analyze), for async callers. Completes on
    /// first poll.
    pub async fn analyze_async(&self, text: &str) -> AnalysisResult {
        self.analyze(text)
    }
}

impl Default for EventAnalyzer<'static> {
    fn default() -> Self {
        Self::with_registry(PatternRegistry::global())
    }
}

/// Analyze `text` with the built-in registry.
pub fn analyze(text: &str) -> AnalysisResult {
    EventAnalyzer::default().analyze(text)
}
