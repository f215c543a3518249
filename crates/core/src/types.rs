//! Core types for tickstore
//!
//! This module defines the foundational value type:
//! - Event: a typed, timestamped point event

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed, timestamped point event
///
/// An event is nothing more than a (type, timestamp) pair. The type is a
/// caller-defined label grouping events into independent timelines; the
/// timestamp is an `i64` in whatever epoch and unit the caller picks, as
/// long as it is consistent per type.
///
/// Events are immutable once constructed. Equality and hashing are
/// structural over both fields, so two events of the same type at the same
/// timestamp are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Event type (caller-defined timeline label)
    pub event_type: String,
    /// Timestamp (caller-defined epoch and unit)
    pub timestamp: i64,
}

impl Event {
    /// Create a new event
    pub fn new(event_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.event_type, self.timestamp)
    }
}
