//! Schema composition contract tests
//!
//! These tests pin the canonical rule shape and the append-order
//! composition guarantee: the composed rule sequence equals the ordered
//! concatenation of each plugin's expanded fragment, with no deduplication
//! and no conflict resolution.

// ===== Canonical Directives =====
pub const DIRECTIVE_NODES: &str = "nodes";
pub const DIRECTIVE_TEXT: &str = "text";
pub const DIRECTIVE_NORMALIZE: &str = "normalize";

// ===== Contract Tests =====
