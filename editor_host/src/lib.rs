//! # Editor Host
//!
//! This crate implements the editor orchestrator: it owns the authoritative
//! snapshot, routes UI events through the resolved plugin list, and governs
//! every state transition with before/after hook chains and identity-based
//! change notifications.
//!
//! ## Philosophy
//!
//! - **One owner**: All mutable orchestrator state (plugin list, schema,
//!   snapshot, cache) lives on one explicitly owned host instance. No
//!   globals.
//! - **Synchronous and sequential**: A dispatch or commit runs to completion
//!   before returning; nested re-entrant calls from hooks complete fully
//!   before the outer chain resumes.
//! - **All or nothing**: A chain that errors commits nothing — the
//!   authoritative snapshot and cache keep their pre-event values.
//! - **Identity over content**: No-op fast paths and notification gating
//!   compare identity tokens, never content.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A renderer or DOM event normalizer
//! - A transform/operation system (snapshots come from `editor_state`)
//! - A schema validator (the composed schema is handed off as-is)

pub mod audit;
pub mod cache;
pub mod config;
pub mod host;

pub use audit::AuditEvent;
pub use cache::StateCache;
pub use config::{ChangeCallback, DocumentChangeCallback, EditorConfig, SelectionChangeCallback};
pub use host::EditorHost;
