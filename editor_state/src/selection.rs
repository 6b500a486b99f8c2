//! Selection boundary value

use crate::document::Position;
use crate::ids::SelectionRevision;
use serde::{Deserialize, Serialize};

/// An immutable selection value
///
/// A selection spans from `anchor` to `focus` and is either focused (owned
/// by the editing surface) or blurred. Like documents, selections carry a
/// revision token: derivations mint a fresh one, clones keep it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    revision: SelectionRevision,
    anchor: Position,
    focus: Position,
    is_focused: bool,
}

impl Selection {
    /// Creates a blurred selection over the given range
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self {
            revision: SelectionRevision::new(),
            anchor,
            focus,
            is_focused: false,
        }
    }

    /// Creates a collapsed (caret) selection at a position
    pub fn collapsed(at: Position) -> Self {
        Self::new(at, at)
    }

    /// Returns the revision token
    pub fn revision(&self) -> SelectionRevision {
        self.revision
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn focus(&self) -> Position {
        self.focus
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Returns true if anchor and focus coincide
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Returns true if both selections carry the same revision token
    pub fn same_revision(&self, other: &Selection) -> bool {
        self.revision == other.revision
    }

    /// Derives a selection over a new range, keeping focus state
    pub fn with_range(&self, anchor: Position, focus: Position) -> Selection {
        Selection {
            revision: SelectionRevision::new(),
            anchor,
            focus,
            is_focused: self.is_focused,
        }
    }

    /// Derives a focused selection over the same range
    ///
    /// Always mints a fresh revision, even when already focused.
    pub fn focused(&self) -> Selection {
        Selection {
            revision: SelectionRevision::new(),
            anchor: self.anchor,
            focus: self.focus,
            is_focused: true,
        }
    }

    /// Derives a blurred selection over the same range
    ///
    /// Always mints a fresh revision, even when already blurred.
    pub fn blurred(&self) -> Selection {
        Selection {
            revision: SelectionRevision::new(),
            anchor: self.anchor,
            focus: self.focus,
            is_focused: false,
        }
    }

    /// Derives a collapsed selection moved to a position
    pub fn moved_to(&self, at: Position) -> Selection {
        self.with_range(at, at)
    }
}
