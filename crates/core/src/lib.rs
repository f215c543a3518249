//! Core types and traits for tickstore
//!
//! This crate defines the foundational pieces used throughout the system:
//! - Event: the (type, timestamp) value type
//! - Error: error type hierarchy
//! - Traits: core trait definitions (EventStore, EventIterator)
//!
//! Backends live in separate crates and implement the traits defined here,
//! so implementations can be swapped without breaking callers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use traits::{EventIterator, EventStore};
pub use types::Event;
