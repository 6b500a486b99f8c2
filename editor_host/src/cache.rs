//! Last-notified state cache
//!
//! Holds the document and selection identity tokens from the last committed
//! snapshot. Change notifications fire exactly when a committed snapshot's
//! tokens differ from the cached ones; the cache refreshes only after a
//! chain completes successfully.

use editor_state::{DocumentRevision, SelectionRevision, Snapshot};

/// Cached identity of the last externally-notified snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCache {
    document: DocumentRevision,
    selection: SelectionRevision,
}

impl StateCache {
    /// Creates a cache seeded from a snapshot
    pub fn new(snapshot: &Snapshot) -> Self {
        Self {
            document: snapshot.document().revision(),
            selection: snapshot.selection().revision(),
        }
    }

    /// Returns the cached document revision
    pub fn document_revision(&self) -> DocumentRevision {
        self.document
    }

    /// Returns the cached selection revision
    pub fn selection_revision(&self) -> SelectionRevision {
        self.selection
    }

    /// Returns true if the snapshot's document identity differs from the cache
    pub fn document_changed(&self, snapshot: &Snapshot) -> bool {
        snapshot.document().revision() != self.document
    }

    /// Returns true if the snapshot's selection identity differs from the cache
    pub fn selection_changed(&self, snapshot: &Snapshot) -> bool {
        snapshot.selection().revision() != self.selection
    }

    /// Refreshes the cache to the snapshot's document and selection
    pub fn refresh(&mut self, snapshot: &Snapshot) {
        self.document = snapshot.document().revision();
        self.selection = snapshot.selection().revision();
    }
}
