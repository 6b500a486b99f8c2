//! Document boundary value with line-based content

use crate::ids::DocumentRevision;
use serde::{Deserialize, Serialize};

/// Position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// An immutable document value
///
/// The real document tree is an external collaborator; this boundary value
/// carries line-based content plus the revision token the orchestrator uses
/// for diffing. Constructors and transforms mint fresh tokens; `Clone`
/// preserves the token (a clone is the same revision).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    revision: DocumentRevision,
    lines: Vec<String>,
}

impl Document {
    /// Creates a document from its lines, minting a fresh revision
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            revision: DocumentRevision::new(),
            lines,
        }
    }

    /// Creates an empty single-line document
    pub fn empty() -> Self {
        Self::new(vec![String::new()])
    }

    /// Creates a document from newline-separated text
    ///
    /// Follows `str::lines`: a trailing newline does not produce an empty
    /// last line, so `from_text("a\n")` is the one-line document `"a"`.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Self::empty()
        } else {
            Self::new(text.lines().map(|s| s.into()).collect())
        }
    }

    /// Returns the revision token
    pub fn revision(&self) -> DocumentRevision {
        self.revision
    }

    /// Returns the document lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the content as newline-joined text
    pub fn as_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Returns the number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the length of a line, or 0 for an out-of-range row
    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map(|s| s.len()).unwrap_or(0)
    }

    /// Returns true if both documents carry the same revision token
    pub fn same_revision(&self, other: &Document) -> bool {
        self.revision == other.revision
    }

    /// Clamps a position to the document's content
    ///
    /// Rows past the last line clamp to the last line, columns past the end
    /// of the line clamp to its length, and a column landing inside a
    /// multi-byte character snaps back to the nearest char boundary.
    pub fn clamp_position(&self, at: Position) -> Position {
        let row = at.row.min(self.lines.len().saturating_sub(1));
        let line = self.lines.get(row).map(String::as_str).unwrap_or("");
        let mut col = at.col.min(line.len());
        while !line.is_char_boundary(col) {
            col -= 1;
        }
        Position::new(row, col)
    }

    /// Derives a new document with the given lines and a fresh revision
    pub fn with_lines(&self, lines: Vec<String>) -> Document {
        Document::new(lines)
    }

    /// Derives a new document with `text` inserted at `at`
    ///
    /// The position is clamped via [`Self::clamp_position`], so out-of-range
    /// rows and columns and positions inside a multi-byte character are all
    /// safe. The text is inserted into the target line as-is; splitting on
    /// embedded newlines is the document tree's concern, not this boundary
    /// value's. The result always carries a fresh revision, even for empty
    /// `text`.
    pub fn with_text_inserted(&self, at: Position, text: &str) -> Document {
        let at = self.clamp_position(at);
        let mut lines = self.lines.clone();
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines[at.row].insert_str(at.col, text);
        Document::new(lines)
    }
}
