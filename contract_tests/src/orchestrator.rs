//! Orchestrator behavior contract tests
//!
//! Scenario tests pinning the guarantees the orchestrator makes: resolved
//! plugin order, first-match-wins dispatch, identity-gated notifications,
//! and all-or-nothing hook chains.

// ===== Resolved List Shape =====
pub const FIRST_PLUGIN: &str = "override";
pub const LAST_PLUGIN: &str = "core";

// ===== Contract Tests =====
