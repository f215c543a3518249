//! Concurrent in-memory event store
//!
//! # Design
//!
//! - DashMap keyed by event type: sharded locking, lock-free reads,
//!   different types never contend
//! - BTreeSet<i64> per type: unique timestamps in ascending order,
//!   O(log n) insert/remove, ordered range scans
//!
//! The per-type set is created through the map's entry API, so concurrent
//! first-inserts of the same new type resolve to exactly one set. A naive
//! contains-then-insert sequence would silently drop one of them.
//!
//! Queries copy the matching range out while holding the shard guard, so
//! the copy never observes a half-applied mutation. The resulting cursor
//! is a stable snapshot; see [`SnapshotCursor`].

use std::collections::BTreeSet;
use std::ops::Bound;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tickstore_core::traits::EventStore;
use tickstore_core::types::Event;
use tracing::{debug, trace};

use crate::cursor::SnapshotCursor;

/// Concurrent in-memory event store
///
/// Maps each event type to an ordered set of unique timestamps. All
/// operations are safe to call from any number of threads without external
/// locking; atomicity is per operation.
///
/// The store is a cheap-clone handle around shared state, so it can be
/// handed to worker threads and cursors without an external `Arc`.
///
/// # Example
///
/// ```
/// use tickstore_core::{Event, EventIterator};
/// use tickstore_engine::InMemoryEventStore;
///
/// let store = InMemoryEventStore::new();
/// store.insert(Event::new("deploy", 1));
/// store.insert(Event::new("deploy", 5));
///
/// let mut cursor = store.query("deploy", 1, 10);
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current().unwrap().timestamp, 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryEventStore {
    /// Per-type ordered timestamp sets
    timelines: Arc<DashMap<String, BTreeSet<i64>>>,
}

impl InMemoryEventStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            timelines: Arc::new(DashMap::new()),
        }
    }

    /// Create a store sized for an expected number of event types
    pub fn with_capacity(num_types: usize) -> Self {
        Self {
            timelines: Arc::new(DashMap::with_capacity(num_types)),
        }
    }

    /// Record an event
    ///
    /// The per-type set is created on first insert through an atomic
    /// get-or-create, so concurrent first-inserts of the same new type all
    /// land in one set. Re-inserting an already-recorded (type, timestamp)
    /// pair is a silent no-op.
    pub fn insert(&self, event: Event) {
        trace!(
            event_type = %event.event_type,
            timestamp = event.timestamp,
            "insert"
        );
        self.timelines
            .entry(event.event_type)
            .or_default()
            .insert(event.timestamp);
    }

    /// Remove every event of the given type
    ///
    /// Atomically drops the whole per-type entry. Returns whether the type
    /// was present; removing an unknown type is a no-op.
    pub fn remove_all(&self, event_type: &str) -> bool {
        let removed = self.timelines.remove(event_type).is_some();
        debug!(event_type, removed, "remove_all");
        removed
    }

    /// Query events of a type with timestamps in `[start_time, end_time)`
    ///
    /// Equal bounds mean an exact timestamp match: `query(t, x, x)` matches
    /// exactly timestamp `x`. An inverted range (`start_time > end_time`)
    /// and an unknown type both yield an empty cursor; this never fails.
    ///
    /// The matching events are copied out under the shard guard, so the
    /// returned [`SnapshotCursor`] is a stable point-in-time snapshot:
    /// later inserts and removals by any thread are not reflected in it.
    pub fn query(&self, event_type: &str, start_time: i64, end_time: i64) -> SnapshotCursor {
        // Expressed with an inclusive upper bound rather than end_time + 1,
        // so an exact-match query at i64::MAX cannot overflow.
        let upper = if start_time == end_time {
            Bound::Included(end_time)
        } else {
            Bound::Excluded(end_time)
        };

        let events: Vec<Event> = if start_time > end_time {
            Vec::new()
        } else {
            self.timelines
                .get(event_type)
                .map(|timeline| {
                    timeline
                        .range((Bound::Included(start_time), upper))
                        .map(|&timestamp| Event::new(event_type, timestamp))
                        .collect()
                })
                .unwrap_or_default()
        };

        trace!(
            event_type,
            start_time,
            end_time,
            matched = events.len(),
            "query snapshot"
        );
        SnapshotCursor::new(self.clone(), events)
    }

    /// Check whether an exact (type, timestamp) pair is recorded
    pub fn contains(&self, event_type: &str, timestamp: i64) -> bool {
        self.timelines
            .get(event_type)
            .map(|timeline| timeline.contains(&timestamp))
            .unwrap_or(false)
    }

    /// Total number of events across all types
    pub fn len(&self) -> usize {
        self.timelines.iter().map(|entry| entry.value().len()).sum()
    }

    /// Check if the store holds no events
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Number of event types currently holding at least one event
    pub fn type_count(&self) -> usize {
        self.timelines.len()
    }

    /// Remove one exact (type, timestamp) pair
    ///
    /// Cursor-forwarded deletion. The pair may have been removed already by
    /// another thread, or the whole type dropped by a concurrent
    /// `remove_all`; both degrade to a silent no-op. Removing the last
    /// timestamp of a type drops the type entry, keeping the invariant that
    /// a type key exists only while it has at least one event.
    pub(crate) fn remove_event(&self, event: &Event) {
        if let Entry::Occupied(mut occupied) = self.timelines.entry(event.event_type.clone()) {
            let removed = occupied.get_mut().remove(&event.timestamp);
            if occupied.get().is_empty() {
                occupied.remove();
            }
            trace!(
                event_type = %event.event_type,
                timestamp = event.timestamp,
                removed,
                "remove_event"
            );
        }
    }
}

impl EventStore for InMemoryEventStore {
    type Cursor = SnapshotCursor;

    fn insert(&self, event: Event) {
        InMemoryEventStore::insert(self, event);
    }

    fn remove_all(&self, event_type: &str) {
        InMemoryEventStore::remove_all(self, event_type);
    }

    fn query(&self, event_type: &str, start_time: i64, end_time: i64) -> SnapshotCursor {
        InMemoryEventStore::query(self, event_type, start_time, end_time)
    }
}

impl std::fmt::Debug for InMemoryEventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventStore")
            .field("type_count", &self.type_count())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickstore_core::traits::EventIterator;

    fn collect(mut cursor: SnapshotCursor) -> Vec<i64> {
        let mut timestamps = Vec::new();
        while cursor.move_next() {
            timestamps.push(cursor.current().unwrap().timestamp);
        }
        timestamps
    }

    #[test]
    fn test_store_creation() {
        let store = InMemoryEventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.type_count(), 0);
    }

    #[test]
    fn test_store_with_capacity() {
        let store = InMemoryEventStore::with_capacity(16);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_and_exact_query() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 1));

        assert_eq!(collect(store.query("t1", 1, 1)), vec![1]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.type_count(), 1);
    }

    #[test]
    fn test_types_are_independent_timelines() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 1));
        store.insert(Event::new("t2", 1));

        assert_eq!(collect(store.query("t1", 1, 1)), vec![1]);
        assert_eq!(collect(store.query("t2", 1, 1)), vec![1]);
        assert_eq!(store.type_count(), 2);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 1));
        store.insert(Event::new("t1", 1));

        assert_eq!(store.len(), 1);
        let mut cursor = store.query("t1", 1, 1);
        assert!(cursor.move_next());
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_unknown_type_yields_empty_cursor() {
        let store = InMemoryEventStore::new();
        let mut cursor = store.query("missing", 0, 100);
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_end_bound_is_exclusive() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 1));
        store.insert(Event::new("t1", 5));

        assert_eq!(collect(store.query("t1", 1, 5)), vec![1]);
        assert_eq!(collect(store.query("t1", 1, 10)), vec![1, 5]);
    }

    #[test]
    fn test_start_bound_is_inclusive() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 5));
        store.insert(Event::new("t1", 10));

        assert_eq!(collect(store.query("t1", 5, 11)), vec![5, 10]);
    }

    #[test]
    fn test_equal_bounds_match_exactly_at_i64_max() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", i64::MAX));

        assert_eq!(
            collect(store.query("t1", i64::MAX, i64::MAX)),
            vec![i64::MAX]
        );
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 5));

        let mut cursor = store.query("t1", 10, 1);
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_query_results_ascending_regardless_of_insert_order() {
        let store = InMemoryEventStore::new();
        for &ts in &[50, 3, 99, 7, 42] {
            store.insert(Event::new("t1", ts));
        }

        assert_eq!(collect(store.query("t1", 0, 100)), vec![3, 7, 42, 50, 99]);
    }

    #[test]
    fn test_negative_timestamps() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", -10));
        store.insert(Event::new("t1", -5));
        store.insert(Event::new("t1", 0));

        assert_eq!(collect(store.query("t1", -10, 0)), vec![-10, -5]);
        assert_eq!(collect(store.query("t1", -5, -5)), vec![-5]);
    }

    #[test]
    fn test_remove_all() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 1));
        store.insert(Event::new("t1", 5));
        store.insert(Event::new("t2", 1));

        assert!(store.remove_all("t1"));

        assert!(!store.query("t1", 1, 10).move_next());
        assert_eq!(collect(store.query("t2", 1, 10)), vec![1]);
        assert_eq!(store.type_count(), 1);
    }

    #[test]
    fn test_remove_all_unknown_type_is_noop() {
        let store = InMemoryEventStore::new();
        assert!(!store.remove_all("missing"));
    }

    #[test]
    fn test_contains() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 7));

        assert!(store.contains("t1", 7));
        assert!(!store.contains("t1", 8));
        assert!(!store.contains("t2", 7));
    }

    #[test]
    fn test_remove_event_drops_empty_type_entry() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 7));

        store.remove_event(&Event::new("t1", 7));

        assert_eq!(store.type_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_event_absent_pair_is_silent() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 7));

        store.remove_event(&Event::new("t1", 99));
        store.remove_event(&Event::new("t2", 7));

        assert!(store.contains("t1", 7));
    }

    #[test]
    fn test_store_clone_shares_state() {
        let store = InMemoryEventStore::new();
        let handle = store.clone();

        handle.insert(Event::new("t1", 1));
        assert!(store.contains("t1", 1));
    }

    #[test]
    fn test_debug_impl() {
        let store = InMemoryEventStore::new();
        store.insert(Event::new("t1", 1));
        let debug_str = format!("{:?}", store);
        assert!(debug_str.contains("InMemoryEventStore"));
        assert!(debug_str.contains("type_count"));
    }

    #[test]
    fn test_insert_through_trait() {
        fn insert_through_trait<S: EventStore>(store: &S) {
            store.insert(Event::new("t1", 1));
        }

        let store = InMemoryEventStore::new();
        insert_through_trait(&store);
        assert!(store.contains("t1", 1));
    }
}
