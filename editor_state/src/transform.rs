//! Transform facility deriving new snapshots
//!
//! Every function here returns a brand-new snapshot with a fresh version
//! token; the input snapshot is never touched. Focus and blur mint new
//! selection revisions even when the focus state is logically unchanged,
//! which is what makes focus-while-focused observable downstream.

use crate::document::{Document, Position};
use crate::selection::Selection;
use crate::snapshot::Snapshot;

/// Derives a snapshot whose selection is focused
pub fn focus(snapshot: &Snapshot) -> Snapshot {
    Snapshot::new(snapshot.document().clone(), snapshot.selection().focused())
}

/// Derives a snapshot whose selection is blurred
pub fn blur(snapshot: &Snapshot) -> Snapshot {
    Snapshot::new(snapshot.document().clone(), snapshot.selection().blurred())
}

/// Derives a snapshot with a replacement document
pub fn set_document(snapshot: &Snapshot, document: Document) -> Snapshot {
    Snapshot::new(document, snapshot.selection().clone())
}

/// Derives a snapshot with a replacement selection
pub fn set_selection(snapshot: &Snapshot, selection: Selection) -> Snapshot {
    Snapshot::new(snapshot.document().clone(), selection)
}

/// Derives a snapshot with a selection over the given range
pub fn select(snapshot: &Snapshot, anchor: Position, focus: Position) -> Snapshot {
    let selection = snapshot.selection().with_range(anchor, focus);
    Snapshot::new(snapshot.document().clone(), selection)
}

/// Derives a snapshot with `text` inserted at the selection focus
///
/// The selection collapses to the end of the inserted text. The focus is
/// clamped against the pre-insertion document, mirroring the insertion.
pub fn insert_text(snapshot: &Snapshot, text: &str) -> Snapshot {
    let at = snapshot.document().clamp_position(snapshot.selection().focus());
    let document = snapshot.document().with_text_inserted(at, text);
    let selection = snapshot
        .selection()
        .moved_to(Position::new(at.row, at.col + text.len()));
    Snapshot::new(document, selection)
}
