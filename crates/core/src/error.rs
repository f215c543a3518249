//! Error types for tickstore
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Every error here is a programmer-usage error reported
//! synchronously to the immediate caller; the store never retries.

use thiserror::Error;

/// Result type alias for tickstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the event store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cursor read or remove while the cursor is not positioned on an
    /// element: either no advance has happened yet, or the most recent
    /// advance ran off the end of the snapshot.
    #[error("invalid cursor state: {0}")]
    InvalidCursorState(&'static str),
}
