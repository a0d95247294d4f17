//! Property tests for analyzer invariants.

use event_analyzer_core::{analyze, EntityKind, EventType};
use proptest::prelude::*;

proptest! {
    #[test]
    fn confidence_always_bounded(text in "\\PC*") {
        let c = analyze(&text).confidence();
        prop_assert!(c >= 0.2 - 1e-9);
        prop_assert!(c <= 1.0);
    }

    #[test]
    fn event_type_in_closed_set(text in "\\PC*") {
        prop_assert!(EventType::ALL.contains(&analyze(&text).event_type()));
    }

    #[test]
    fn analysis_is_deterministic(text in "\\PC*") {
        let first = serde_json::to_string(&analyze(&text)).unwrap();
        let second = serde_json::to_string(&analyze(&text)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn adding_an_entity_never_lowers_confidence(text in "\\PC{0,80}") {
        let before = analyze(&text).confidence();
        let after = analyze(&format!("{text} #tag")).confidence();
        prop_assert!(after >= before);
    }

    #[test]
    fn every_hashtag_found_in_order(tags in prop::collection::vec("[a-z0-9_]{1,8}", 1..6)) {
        let text = tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        let result = analyze(&text);
        let found: Vec<_> = result
            .entities()
            .iter()
            .filter(|e| e.kind == EntityKind::Hashtag)
            .collect();
        prop_assert_eq!(found.len(), tags.len());

        let mut offset = 0;
        for (entity, tag) in found.iter().zip(&tags) {
            prop_assert_eq!(&entity.value, tag);
            prop_assert_eq!(entity.offset, offset);
            offset += tag.len() + 2;
        }
    }
}
