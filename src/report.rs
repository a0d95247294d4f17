//! Display rendering of analysis results.

use serde::Serialize;

use crate::error::Result;
use crate::types::{
    AnalysisResult, EntityMatch, EventType, LocationMatch, Relation, Severity, TemporalMatch,
};

impl AnalysisResult {
    /// One-line summary, e.g.
    /// `Type: Gathering | Time: 14:30 | Location: Boston | Entities: hashtag: rally`.
    ///
    /// Categories without matches are left out.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Type: {}", self.event_type())];

        if !self.temporal().is_empty() {
            let times: Vec<&str> = self.temporal().iter().map(|t| t.value.as_str()).collect();
            parts.push(format!("Time: {}", times.join(", ")));
        }

        if !self.locations().is_empty() {
            let places: Vec<&str> = self.locations().iter().map(|p| p.value.as_str()).collect();
            parts.push(format!("Location: {}", places.join(", ")));
        }

        if !self.entities().is_empty() {
            let entities: Vec<String> = self
                .entities()
                .iter()
                .map(|e| format!("{}: {}", e.kind, e.value))
                .collect();
            parts.push(format!("Entities: {}", entities.join(", ")));
        }

        parts.join(" | ")
    }

    /// Display form of the result with a percentage confidence and summary.
    pub fn report(&self) -> AnalysisReport<'_> {
        AnalysisReport {
            text: self.text(),
            event_type: self.event_type(),
            time: self.temporal(),
            place: self.locations(),
            entities: self.entities(),
            relations: self.relations(),
            confidence: format!("{:.1}%", self.confidence() * 100.0),
            severity: self.severity(),
            summary: self.summary(),
        }
    }
}

/// Borrowed view of an [`AnalysisResult`] for display.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    pub text: &'a str,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub time: &'a [TemporalMatch],
    pub place: &'a [LocationMatch],
    pub entities: &'a [EntityMatch],
    pub relations: &'a [Relation],
    /// e.g. `"80.0%"`
    pub confidence: String,
    pub severity: Severity,
    pub summary: String,
}

impl AnalysisReport<'_> {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::analyze;

    #[test]
    fn test_summary_type_only() {
        assert_eq!(analyze("nothing to see").summary(), "Type: Incident");
    }

    #[test]
    fn test_summary_omits_empty_fields() {
        let result = analyze("Meeting #budget #vote");
        assert_eq!(
            result.summary(),
            "Type: Gathering | Entities: hashtag: budget, hashtag: vote"
        );
    }

    #[test]
    fn test_summary_all_fields() {
        let result = analyze("Crisis in Denver at 08:15 today @cityhall");
        assert_eq!(
            result.summary(),
            "Type: Crisis | Time: 08:15, today | Location: Denver | Entities: person: cityhall"
        );
    }

    #[test]
    fn test_report_formats_confidence() {
        let result = analyze("Crisis in Denver");
        let report = result.report();
        assert_eq!(report.confidence, "50.0%");
        assert_eq!(report.summary, "Type: Crisis | Location: Denver");

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["type"], "Crisis");
        assert_eq!(json["confidence"], "50.0%");
        assert_eq!(json["severity"], 2);
        assert_eq!(json["place"][0]["type"], "city");
        assert_eq!(json["place"][0]["value"], "Denver");
        assert_eq!(json["relations"], serde_json::json!([]));
    }
}
