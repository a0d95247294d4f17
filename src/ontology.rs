//! Event ontology vocabularies for [`Relation`](crate::Relation) records.
//!
//! The analyzer does not infer relations yet; these tables define which
//! relationship kinds a relation may carry.

use std::fmt;

use serde::Serialize;

use crate::types::Relation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ontology {
    /// Historical Event Ontology.
    #[serde(rename = "HEO")]
    Heo,
    #[serde(rename = "EVENT_ONTOLOGY")]
    EventOntology,
}

impl Ontology {
    pub const ALL: [Ontology; 2] = [Ontology::Heo, Ontology::EventOntology];

    pub fn name(self) -> &'static str {
        match self {
            Ontology::Heo => "HEO",
            Ontology::EventOntology => "EVENT_ONTOLOGY",
        }
    }

    pub fn relationships(self) -> &'static [&'static str] {
        match self {
            Ontology::Heo => &["causes", "effects", "participates_in"],
            Ontology::EventOntology => &["sub_event", "parallel_event", "sequential_event"],
        }
    }

    /// Event categories defined by the ontology, if any.
    pub fn event_types(self) -> &'static [&'static str] {
        match self {
            Ontology::Heo => &["historical", "causal", "participatory"],
            Ontology::EventOntology => &[],
        }
    }

    /// Event properties defined by the ontology, if any.
    pub fn properties(self) -> &'static [&'static str] {
        match self {
            Ontology::Heo => &[],
            Ontology::EventOntology => &["duration", "frequency", "scale"],
        }
    }

    pub fn supports(self, relationship: &str) -> bool {
        self.relationships().contains(&relationship)
    }

    /// The ontology defining `relationship`.
    pub fn for_relationship(relationship: &str) -> Option<Ontology> {
        Ontology::ALL.into_iter().find(|o| o.supports(relationship))
    }
}

impl fmt::Display for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Relation {
    /// Ontology whose vocabulary defines this relation's kind.
    pub fn ontology(&self) -> Option<Ontology> {
        Ontology::for_relationship(&self.kind)
    }
}
