//! Pattern registry — recognizer tables and event keyword lists.
//!
//! The registry is built once and only read afterwards. Regexes are
//! compiled lazily into process-wide statics and shared by every registry;
//! keyword lists are owned so callers can override them from TOML.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::{EntityKind, EventType, LocationKind, TemporalKind};

// ── Built-in keywords (generated from config/event_keywords.toml) ───

pub(crate) struct KeywordSet {
    event_type: EventType,
    keywords: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/keywords.rs"));

// ── Temporal recognizers ────────────────────────────────────────────

static ABSOLUTE_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{1,2}:[0-9]{2}").unwrap());

static RELATIVE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(today|yesterday|tomorrow|tonight)").unwrap());

static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{2,4}").unwrap());

// ── Location recognizers ────────────────────────────────────────────

// Capitalized words after a literal "in "
static CITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"in ([A-Z][a-z]+(?: [A-Z][a-z]+)*)").unwrap());

// "at 221B Baker St": number, optional unit letters, capitalized street, suffix
static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:at) ([0-9]+[A-Za-z]* [A-Z][a-z]+ (?i:St|Ave|Rd|Blvd|Lane|Drive|Circle|Square))",
    )
    .unwrap()
});

// ── Entity recognizers ──────────────────────────────────────────────

static PERSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"@([A-Za-z0-9_]+)").unwrap());

static ORGANIZATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+ (?:Inc|Corp|LLC|Ltd|Organization|Association))").unwrap()
});

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").unwrap());

static GLOBAL: Lazy<PatternRegistry> = Lazy::new(PatternRegistry::new);

// ── Registry ────────────────────────────────────────────────────────

/// Trigger words for one event type, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordList {
    event_type: EventType,
    keywords: Vec<String>,
}

impl KeywordList {
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Immutable recognizer and keyword tables.
///
/// Iteration order of every table is fixed and part of the output
/// contract: temporal (absolute, relative, date), location (city,
/// address), entity (person, organization, hashtag), keywords in
/// [`EventType`] declaration order.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    keywords: Vec<KeywordList>,
}

impl PatternRegistry {
    /// Registry with the built-in keyword table.
    pub fn new() -> Self {
        let keywords = BUILTIN_KEYWORDS
            .iter()
            .map(|set| KeywordList {
                event_type: set.event_type,
                keywords: set.keywords.iter().map(|kw| kw.to_string()).collect(),
            })
            .collect();
        Self { keywords }
    }

    /// Shared process-wide registry with the built-in tables.
    pub fn global() -> &'static PatternRegistry {
        &GLOBAL
    }

    /// Built-in registry with keyword lists replaced per `config`.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut registry = Self::new();
        let mut seen: Vec<EventType> = Vec::with_capacity(config.keywords.len());
        for (name, words) in &config.keywords {
            let event_type = name
                .parse::<EventType>()
                .inspect_err(|e| warn!(error = %e, "rejected keyword override"))?;
            if seen.contains(&event_type) {
                let err = Error::DuplicateEventType(event_type);
                warn!(error = %err, "rejected keyword override");
                return Err(err);
            }
            seen.push(event_type);
            let keywords = normalize_keywords(event_type, words)
                .inspect_err(|e| warn!(error = %e, %event_type, "rejected keyword override"))?;
            if let Some(list) = registry
                .keywords
                .iter_mut()
                .find(|list| list.event_type == event_type)
            {
                list.keywords = keywords;
            }
        }
        info!(
            overrides = config.keywords.len(),
            "built pattern registry from config"
        );
        Ok(registry)
    }

    /// Parse a TOML override document, e.g.
    ///
    /// ```toml
    /// [keywords]
    /// Crisis = ["flood", "earthquake"]
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(source)?;
        Self::from_config(&config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn temporal_patterns(&self) -> [(TemporalKind, &'static Regex); 3] {
        [
            (TemporalKind::Absolute, &*ABSOLUTE_TIME),
            (TemporalKind::Relative, &*RELATIVE_TIME),
            (TemporalKind::Date, &*NUMERIC_DATE),
        ]
    }

    pub fn location_patterns(&self) -> [(LocationKind, &'static Regex); 2] {
        [
            (LocationKind::City, &*CITY),
            (LocationKind::Address, &*ADDRESS),
        ]
    }

    pub fn entity_patterns(&self) -> [(EntityKind, &'static Regex); 3] {
        [
            (EntityKind::Person, &*PERSON),
            (EntityKind::Organization, &*ORGANIZATION),
            (EntityKind::Hashtag, &*HASHTAG),
        ]
    }

    /// Keyword lists in declaration order.
    pub fn keyword_lists(&self) -> &[KeywordList] {
        &self.keywords
    }

    pub fn keywords_for(&self, event_type: EventType) -> &[String] {
        self.keywords
            .iter()
            .find(|list| list.event_type == event_type)
            .map(|list| list.keywords.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword overrides, keyed by event type name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub keywords: BTreeMap<String, Vec<String>>,
}

fn normalize_keywords(event_type: EventType, words: &[String]) -> Result<Vec<String>> {
    if words.is_empty() {
        return Err(Error::EmptyKeywordList(event_type));
    }
    words
        .iter()
        .map(|word| {
            let kw = word.trim().to_lowercase();
            if kw.is_empty() {
                Err(Error::InvalidKeyword {
                    event_type,
                    keyword: word.clone(),
                })
            } else {
                Ok(kw)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keywords_in_declaration_order() {
        let registry = PatternRegistry::new();
        let order: Vec<EventType> = registry
            .keyword_lists()
            .iter()
            .map(KeywordList::event_type)
            .collect();
        assert_eq!(order, EventType::ALL.to_vec());
        assert_eq!(
            registry.keywords_for(EventType::Incident),
            ["happened", "occurred", "reported"]
        );
        assert_eq!(
            registry.keywords_for(EventType::Crisis),
            ["emergency", "crisis", "disaster"]
        );
    }

    #[test]
    fn test_pattern_tables_order() {
        let registry = PatternRegistry::global();
        let temporal: Vec<_> = registry.temporal_patterns().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            temporal,
            [TemporalKind::Absolute, TemporalKind::Relative, TemporalKind::Date]
        );
        let entity: Vec<_> = registry.entity_patterns().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            entity,
            [EntityKind::Person, EntityKind::Organization, EntityKind::Hashtag]
        );
    }

    #[test]
    fn test_address_suffix_case_insensitive() {
        let caps = ADDRESS.captures("meet AT 12b Main street").unwrap();
        assert_eq!(&caps[1], "12b Main st");
        assert!(ADDRESS.captures("at 12 main St").is_none());
    }

    #[test]
    fn test_override_keeps_other_types() {
        let registry = PatternRegistry::from_toml_str(
            r#"
            [keywords]
            crisis = ["Flood", " earthquake "]
            "#,
        )
        .unwrap();
        assert_eq!(registry.keywords_for(EventType::Crisis), ["flood", "earthquake"]);
        assert_eq!(
            registry.keywords_for(EventType::Gathering),
            ["protest", "meeting", "assembly"]
        );
        assert_eq!(registry.keyword_lists()[3].event_type(), EventType::Crisis);
    }

    #[test]
    fn test_override_rejects_bad_input() {
        assert!(matches!(
            PatternRegistry::from_toml_str("[keywords]\nRiot = [\"x\"]"),
            Err(Error::UnknownEventType(_))
        ));
        assert!(matches!(
            PatternRegistry::from_toml_str("[keywords]\nCrisis = []"),
            Err(Error::EmptyKeywordList(EventType::Crisis))
        ));
        assert!(matches!(
            PatternRegistry::from_toml_str("[keywords]\nCrisis = [\"  \"]"),
            Err(Error::InvalidKeyword { event_type: EventType::Crisis, .. })
        ));
        assert!(matches!(
            PatternRegistry::from_toml_str("[patterns]\ncity = \"x\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_override_rejects_same_type_twice() {
        let result = PatternRegistry::from_toml_str(
            r#"
            [keywords]
            crisis = ["flood"]
            Crisis = ["earthquake"]
            "#,
        );
        assert!(matches!(
            result,
            Err(Error::DuplicateEventType(EventType::Crisis))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            PatternRegistry::from_toml_file("/nonexistent/event_keywords.toml"),
            Err(Error::Io(_))
        ));
    }
}
