//! Error types for registry configuration and report rendering.
//!
//! Analysis itself is infallible; only caller-supplied configuration can be
//! rejected.

use thiserror::Error;

use crate::types::EventType;

/// Result type for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Keyword override document is not valid TOML or has the wrong shape.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    /// Two override keys name the same event type, e.g. `crisis` and `Crisis`.
    #[error("Duplicate keyword override for {0}")]
    DuplicateEventType(EventType),

    #[error("Invalid keyword for {event_type}: {keyword:?}")]
    InvalidKeyword { event_type: EventType, keyword: String },

    #[error("Empty keyword list for {0}")]
    EmptyKeywordList(EventType),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
