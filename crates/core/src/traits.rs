//! Core traits for the event store abstraction
//!
//! This module defines the EventStore and EventIterator traits that enable
//! swapping the in-memory backend for other implementations without
//! breaking callers.

use crate::error::Result;
use crate::types::Event;

/// Store abstraction for typed, timestamped events
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads without external locking (requires Send + Sync).
/// Atomicity is guaranteed per operation, never across a sequence of them.
pub trait EventStore: Send + Sync {
    /// Cursor type produced by [`EventStore::query`]
    type Cursor: EventIterator;

    /// Record an event
    ///
    /// Inserting a (type, timestamp) pair that is already recorded is a
    /// silent no-op. Never fails.
    fn insert(&self, event: Event);

    /// Remove every event of the given type
    ///
    /// No-op when the type is unknown.
    fn remove_all(&self, event_type: &str);

    /// Query events of a type with timestamps in `[start_time, end_time)`
    ///
    /// When `start_time == end_time` the range means an exact timestamp
    /// match. An unknown type yields an empty cursor; this never fails.
    ///
    /// The returned cursor is a snapshot taken at call time: inserts and
    /// removals after this call are not reflected in it, except deletions
    /// issued through the cursor itself.
    fn query(&self, event_type: &str, start_time: i64, end_time: i64) -> Self::Cursor;
}

/// Forward-only, single-pass iterator over query results
///
/// A cursor is a single-owner traversal object; it is not meant to be
/// shared between threads. Only the deletion it forwards into the backing
/// store touches shared state.
pub trait EventIterator {
    /// Advance to the next event
    ///
    /// Returns whether a next event exists. Keeps returning false once
    /// exhausted; never wraps or resets.
    fn move_next(&mut self) -> bool;

    /// The event at the cursor's position
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursorState`](crate::Error::InvalidCursorState)
    /// if called before the first advance or after the cursor is exhausted.
    fn current(&self) -> Result<&Event>;

    /// Delete the event at the cursor's position from the backing store
    ///
    /// Deletion is by (type, timestamp) identity; a pair no longer present
    /// in the store is deleted silently rather than reported. The cursor's
    /// position does not change, so repeated calls without an intervening
    /// advance are allowed.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`EventIterator::current`].
    fn remove(&mut self) -> Result<()>;

    /// Release any cursor-held resources
    ///
    /// The in-memory backend holds nothing beyond its snapshot, but
    /// backends with real resources release them here.
    ///
    /// # Errors
    ///
    /// Backend-specific; the in-memory backend never fails.
    fn close(&mut self) -> Result<()>;
}
