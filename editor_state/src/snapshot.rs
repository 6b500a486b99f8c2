//! Immutable document/selection snapshot

use crate::document::Document;
use crate::ids::SnapshotVersion;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// An immutable snapshot combining a document and a selection
///
/// The snapshot's version token is the unit of comparison for the
/// orchestrator's no-op fast paths; the inner document and selection tokens
/// drive change notifications. Transforms always mint a fresh version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    version: SnapshotVersion,
    document: Document,
    selection: Selection,
}

impl Snapshot {
    /// Creates a snapshot, minting a fresh version token
    pub fn new(document: Document, selection: Selection) -> Self {
        Self {
            version: SnapshotVersion::new(),
            document,
            selection,
        }
    }

    /// Creates an empty blurred snapshot with a caret at the origin
    pub fn empty() -> Self {
        Self::new(
            Document::empty(),
            Selection::collapsed(crate::document::Position::zero()),
        )
    }

    /// Returns the version token
    pub fn version(&self) -> SnapshotVersion {
        self.version
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns true if both snapshots carry the same version token
    pub fn same_version(&self, other: &Snapshot) -> bool {
        self.version == other.version
    }

    /// Compute a deterministic hash of snapshot content (not identity)
    ///
    /// Used in tests to show that content hashing and version tokens are
    /// independent axes: content-equal snapshots hash identically while
    /// still counting as changed.
    #[cfg(test)]
    pub fn content_hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for line in self.document.lines() {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        let sel = &self.selection;
        hasher.update(sel.anchor().row.to_le_bytes());
        hasher.update(sel.anchor().col.to_le_bytes());
        hasher.update(sel.focus().row.to_le_bytes());
        hasher.update(sel.focus().col.to_le_bytes());
        hasher.update([sel.is_focused() as u8]);

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
