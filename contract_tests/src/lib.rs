//! # Orchestrator Contract Tests
//!
//! This crate provides "golden" tests for the editor orchestrator's plugin
//! contract to ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: The plugin contract is written as code
//! - **Testability first**: Contract tests fail when interfaces change
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each concern has a module with contract tests that verify:
//! - The recognized event vocabulary and its serialized names
//! - Schema rule shapes and append-order composition
//! - Resolved plugin order and the dispatch/commit guarantees the
//!   orchestrator makes to plugins and hosts

pub mod events;
pub mod orchestrator;
pub mod schema;

/// Common helpers for contract validation
pub mod test_helpers {
    use editor_state::{Document, Position, Selection, Snapshot};

    /// Creates the canonical snapshot used across scenario tests
    pub fn sample_snapshot() -> Snapshot {
        Snapshot::new(
            Document::from_text("hello"),
            Selection::collapsed(Position::new(0, 5)),
        )
    }
}
