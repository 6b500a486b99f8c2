//! Plugin failure types
//!
//! Hooks are contractually total: they return a snapshot or no result. A
//! hook that cannot uphold that raises a [`HookError`], which the chain
//! wraps with the failing plugin and phase before propagating. The
//! orchestrator commits nothing when a chain errors.

use crate::event::EventKind;
use thiserror::Error;

/// Error raised inside a single plugin hook
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct HookError {
    pub reason: String,
}

impl HookError {
    /// Creates a hook error with the given reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Error from a dispatch or hook chain, tagged with plugin and phase
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PluginError {
    #[error("plugin '{plugin}' failed handling '{event}': {source}")]
    Dispatch {
        plugin: String,
        event: EventKind,
        source: HookError,
    },

    #[error("plugin '{plugin}' failed in before-change chain: {source}")]
    BeforeChange { plugin: String, source: HookError },

    #[error("plugin '{plugin}' failed in change chain: {source}")]
    Change { plugin: String, source: HookError },
}
