//! Snapshot cursor over query results
//!
//! A query materializes its matching events into a `Vec` before returning,
//! so the cursor never has to reconcile traversal with concurrent mutation
//! of the store. The price is that the snapshot can go stale: an event the
//! cursor is positioned on may already be gone from the store. Deletion is
//! therefore by value identity and tolerates "not found" as success.

use tickstore_core::error::{Error, Result};
use tickstore_core::traits::EventIterator;
use tickstore_core::types::Event;

use crate::store::InMemoryEventStore;

/// Cursor position within the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Before the first element; no advance has happened yet
    Unstarted,
    /// Most recent advance landed on this snapshot index
    At(usize),
    /// Most recent advance ran off the end; terminal
    Exhausted,
}

/// Forward-only, single-pass cursor over a materialized query snapshot
///
/// Produced by [`InMemoryEventStore::query`]. Holds a fixed copy of the
/// matching events taken at query time, a position, and a handle back to
/// the store so [`EventIterator::remove`] can forward deletions.
///
/// A cursor is a single-owner traversal object; send it to another thread
/// if you like, but do not share one between threads.
///
/// # State machine
///
/// Unstarted --move_next(true)--> Positioned --move_next(false)--> Exhausted,
/// and Exhausted keeps answering false. `remove` never changes state.
#[derive(Debug)]
pub struct SnapshotCursor {
    store: InMemoryEventStore,
    events: Vec<Event>,
    position: Position,
}

impl SnapshotCursor {
    pub(crate) fn new(store: InMemoryEventStore, events: Vec<Event>) -> Self {
        Self {
            store,
            events,
            position: Position::Unstarted,
        }
    }

    /// Number of events captured in the snapshot
    ///
    /// Fixed at query time; unaffected by traversal or removal.
    pub fn snapshot_len(&self) -> usize {
        self.events.len()
    }

    fn positioned(&self) -> Result<&Event> {
        match self.position {
            Position::Unstarted => Err(Error::InvalidCursorState(
                "no current element; must advance first",
            )),
            Position::Exhausted => Err(Error::InvalidCursorState("no current element")),
            Position::At(index) => Ok(&self.events[index]),
        }
    }
}

impl EventIterator for SnapshotCursor {
    fn move_next(&mut self) -> bool {
        let next = match self.position {
            Position::Unstarted => 0,
            Position::At(index) => index + 1,
            Position::Exhausted => return false,
        };

        if next < self.events.len() {
            self.position = Position::At(next);
            true
        } else {
            self.position = Position::Exhausted;
            false
        }
    }

    fn current(&self) -> Result<&Event> {
        self.positioned()
    }

    fn remove(&mut self) -> Result<()> {
        let event = self.positioned()?;
        // The backing pair may already be gone (another cursor, or a
        // concurrent remove_all); forwarding is a silent no-op then.
        self.store.remove_event(event);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // Nothing to release for the in-memory backend.
        Ok(())
    }
}
