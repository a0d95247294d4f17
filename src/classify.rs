//! Event classification — keyword tally over the registry's keyword lists.
//!
//! Matching is plain lower-case substring containment, so "reported" also
//! counts inside "unreported".

use crate::registry::PatternRegistry;
use crate::types::EventType;

/// Number of keywords of each event type found in `text`, in declaration
/// order.
pub fn keyword_tally(registry: &PatternRegistry, text: &str) -> Vec<(EventType, usize)> {
    let haystack = text.to_lowercase();
    registry
        .keyword_lists()
        .iter()
        .map(|list| {
            let score = list
                .keywords()
                .iter()
                .filter(|kw| haystack.contains(kw.as_str()))
                .count();
            (list.event_type(), score)
        })
        .collect()
}

/// Classify the dominant event type of `text`.
///
/// The first event type (in declaration order) with the highest non-zero
/// keyword count wins; `Incident` when nothing matches.
pub fn classify(registry: &PatternRegistry, text: &str) -> EventType {
    let mut best = EventType::default();
    let mut best_score = 0usize;

    for (event_type, score) in keyword_tally(registry, text) {
        if score > best_score {
            best_score = score;
            best = event_type;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(text: &str) -> EventType {
        classify(PatternRegistry::global(), text)
    }

    #[test]
    fn test_classify_gathering() {
        assert_eq!(
            classify_default("Huge protest outside the town meeting"),
            EventType::Gathering
        );
    }

    #[test]
    fn test_classify_crisis_case_insensitive() {
        assert_eq!(
            classify_default("STATE OF EMERGENCY after the disaster"),
            EventType::Crisis
        );
    }

    #[test]
    fn test_default_incident() {
        assert_eq!(classify_default("lovely weather"), EventType::Incident);
        assert_eq!(classify_default(""), EventType::Incident);
    }

    #[test]
    fn test_tie_breaks_by_declaration_order() {
        // one Announcement keyword, one Crisis keyword
        assert_eq!(
            classify_default("Mayor announced an emergency"),
            EventType::Announcement
        );
        // one Incident keyword, one Gathering keyword
        assert_eq!(
            classify_default("the protest happened"),
            EventType::Incident
        );
    }

    #[test]
    fn test_strictly_higher_count_wins() {
        assert_eq!(
            classify_default("It happened: officials declared and stated a crisis"),
            EventType::Announcement
        );
    }

    #[test]
    fn test_substring_not_word_boundary() {
        assert_eq!(classify_default("unreported meetings"), EventType::Incident);
        let tally = keyword_tally(PatternRegistry::global(), "unreported meetings");
        assert_eq!(
            tally,
            [
                (EventType::Incident, 1),
                (EventType::Gathering, 1),
                (EventType::Announcement, 0),
                (EventType::Crisis, 0),
            ]
        );
    }

    #[test]
    fn test_custom_registry_keywords() {
        let registry =
            PatternRegistry::from_toml_str("[keywords]\nCrisis = [\"flood\"]").unwrap();
        assert_eq!(classify(&registry, "Flood waters rising"), EventType::Crisis);
        assert_eq!(classify(&registry, "a crisis"), EventType::Incident);
    }
}
