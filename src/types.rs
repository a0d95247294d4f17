//! Event record types produced by the analyzer.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

// ── Event classification ────────────────────────────────────────────

/// Closed set of event categories.
///
/// Declaration order is significant: the classifier resolves ties in
/// favour of the variant declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub enum EventType {
    #[default]
    Incident,
    Gathering,
    Announcement,
    Crisis,
}

impl EventType {
    /// All variants in declaration order.
    pub const ALL: [EventType; 4] = [
        EventType::Incident,
        EventType::Gathering,
        EventType::Announcement,
        EventType::Crisis,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Incident => "Incident",
            EventType::Gathering => "Gathering",
            EventType::Announcement => "Announcement",
            EventType::Crisis => "Crisis",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = Error;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownEventType(s.to_string()))
    }
}

/// Ordered severity scale, backed by levels 1-4.
///
/// Serializes as its integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl Severity {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Severity::Low),
            2 => Some(Severity::Medium),
            3 => Some(Severity::High),
            4 => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

// ── Match kinds ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalKind {
    /// Clock time such as `14:30`.
    Absolute,
    /// One of today / yesterday / tomorrow / tonight.
    Relative,
    /// Numeric date such as `12/05/2024`.
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    City,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// `@handle` mention.
    Person,
    Organization,
    Hashtag,
}

impl TemporalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TemporalKind::Absolute => "absolute",
            TemporalKind::Relative => "relative",
            TemporalKind::Date => "date",
        }
    }
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::City => "city",
            LocationKind::Address => "address",
        }
    }
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Organization => "organization",
            EntityKind::Hashtag => "hashtag",
        }
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Matches ─────────────────────────────────────────────────────────

/// A temporal expression, verbatim from the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalMatch {
    #[serde(rename = "type")]
    pub kind: TemporalKind,
    pub value: String,
}

/// A location name (the captured name, without the lead-in preposition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationMatch {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub value: String,
}

/// A named entity with the offset of its match in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityMatch {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub value: String,
    /// Zero-based offset in UTF-16 code units (JavaScript string index).
    #[serde(rename = "position")]
    pub offset: usize,
}

/// Link between two events. Reserved; the analyzer never emits one.
///
/// Serializes as `{ type, sourceId, targetId }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: String,
    pub source_id: String,
    pub target_id: String,
}

// ── Result ──────────────────────────────────────────────────────────

/// Structured record for one analyzed text.
///
/// Built fresh per call and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    text: String,
    #[serde(rename = "type")]
    event_type: EventType,
    time: Vec<TemporalMatch>,
    place: Vec<LocationMatch>,
    entities: Vec<EntityMatch>,
    relations: Vec<Relation>,
    confidence: f64,
    severity: Severity,
}

impl AnalysisResult {
    pub(crate) fn new(
        text: &str,
        event_type: EventType,
        time: Vec<TemporalMatch>,
        place: Vec<LocationMatch>,
        entities: Vec<EntityMatch>,
        confidence: f64,
    ) -> Self {
        Self {
            text: text.to_string(),
            event_type,
            time,
            place,
            entities,
            relations: Vec::new(),
            confidence,
            severity: Severity::Medium,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn temporal(&self) -> &[TemporalMatch] {
        &self.time
    }

    pub fn locations(&self) -> &[LocationMatch] {
        &self.place
    }

    pub fn entities(&self) -> &[EntityMatch] {
        &self.entities
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Heuristic score in `[0.2, 1.0]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
