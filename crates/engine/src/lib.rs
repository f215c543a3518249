//! Concurrent in-memory backend for tickstore
//!
//! Implements the `EventStore` / `EventIterator` traits from
//! `tickstore-core` with a sharded concurrent map keyed by event type and
//! an ordered set of unique timestamps per type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod store;

pub use cursor::SnapshotCursor;
pub use store::InMemoryEventStore;
