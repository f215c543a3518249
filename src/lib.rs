//! Tickstore - concurrent in-memory store for typed, timestamped events
//!
//! Tickstore records point events as (type, timestamp) pairs and supports
//! insertion, bulk deletion by type, half-open range queries, and deletion
//! of individual events discovered during iteration. All store operations
//! are safe to call from any number of threads without external locking.
//!
//! # Quick Start
//!
//! ```
//! use tickstore::{Event, EventIterator, InMemoryEventStore};
//!
//! let store = InMemoryEventStore::new();
//! store.insert(Event::new("deploy", 1_000));
//! store.insert(Event::new("deploy", 2_000));
//!
//! // Equal bounds mean "exact timestamp match"
//! let mut cursor = store.query("deploy", 1_000, 1_000);
//! assert!(cursor.move_next());
//! assert_eq!(cursor.current().unwrap().timestamp, 1_000);
//! assert!(!cursor.move_next());
//! ```
//!
//! # Architecture
//!
//! The [`EventStore`] and [`EventIterator`] traits define the seam between
//! callers and backends. [`InMemoryEventStore`] is the concurrent in-memory
//! backend; its queries return a [`SnapshotCursor`] over a point-in-time
//! copy of the matching events.

// Re-export the public API from the member crates
pub use tickstore_core::{Error, Event, EventIterator, EventStore, Result};
pub use tickstore_engine::{InMemoryEventStore, SnapshotCursor};
