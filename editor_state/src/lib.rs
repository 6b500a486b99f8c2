//! # Editor State
//!
//! This crate defines the immutable document/selection snapshot model shared
//! by the editor orchestrator and its plugins.
//!
//! ## Philosophy
//!
//! - **Immutable values**: Every transformation produces a brand-new snapshot;
//!   nothing is mutated in place.
//! - **Explicit identity**: Snapshots, documents, and selections carry opaque
//!   revision tokens minted at construction. Identity, not content equality,
//!   is the unit of comparison throughout the orchestrator.
//! - **Boundary-minimal**: The rich-text tree lives elsewhere; documents here
//!   are line-based values just deep enough to exercise the pipeline.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A rich-text tree (blocks, inline nodes, marks)
//! - An operation/transform algebra with undo history
//! - A serialization format for persisted documents

pub mod document;
pub mod ids;
pub mod selection;
pub mod snapshot;
pub mod transform;

pub use document::{Document, Position};
pub use ids::{DocumentRevision, SelectionRevision, SnapshotVersion};
pub use selection::Selection;
pub use snapshot::Snapshot;
