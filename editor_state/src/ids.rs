//! Opaque identity tokens for state values
//!
//! Two snapshots (or documents, or selections) are "the same" exactly when
//! their tokens are equal. Cloning a value preserves its token; only a
//! transform mints a fresh one. Content-equal values with distinct tokens
//! count as changed everywhere the orchestrator diffs state.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity token for a document value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRevision(Uuid);

impl DocumentRevision {
    /// Creates a new random revision token
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a revision token from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentRevision {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentRevision({})", self.0)
    }
}

/// Identity token for a selection value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRevision(Uuid);

impl SelectionRevision {
    /// Creates a new random revision token
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a revision token from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SelectionRevision {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SelectionRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelectionRevision({})", self.0)
    }
}

/// Identity token for a whole snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotVersion(Uuid);

impl SnapshotVersion {
    /// Creates a new random version token
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a version token from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SnapshotVersion {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnapshotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SnapshotVersion({})", self.0)
    }
}
