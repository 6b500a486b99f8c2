//! # Editor Plugins
//!
//! This crate defines the plugin contract for the editor orchestrator: the
//! recognized UI event vocabulary, the plugin capability record, plugin list
//! resolution, and schema composition.
//!
//! ## Philosophy
//!
//! - **Fixed-shape capabilities**: A plugin is a record of optional, named
//!   hooks — not a dynamic bag of properties. Absence means "declines to
//!   participate", never an error.
//! - **Deterministic order**: The resolved list is always
//!   `[override, ...user plugins in given order, core]`, and order is the
//!   only priority mechanism.
//! - **Explicit results**: Hooks return `Option<Snapshot>`; "no result" is
//!   a value, not a sentinel. Failure is a `Result::Err` that aborts the
//!   surrounding chain.
//! - **Additive schemas**: Composition concatenates expanded fragments in
//!   list order; nothing is deduplicated or overridden at this layer.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Schema rule validation (rules are forwarded to the validator as-is)
//! - Keyboard-to-operation mapping
//! - The orchestrator itself (see `editor_host`)

pub mod core;
pub mod error;
pub mod event;
pub mod plugin;
pub mod resolver;
pub mod schema;

pub use crate::core::{core_plugin, CORE_PLUGIN_NAME};
pub use error::{HookError, PluginError};
pub use event::{EventKind, EventPayload, KeyCode, KeyInput, Modifiers};
pub use plugin::{ChangeHook, EditorHandle, EventHook, HookResult, Plugin, PluginId, PluginList};
pub use resolver::{resolve, HandlerOverrides, OVERRIDE_PLUGIN_NAME};
pub use schema::{compose, RuleSpec, RuleTarget, Schema, SchemaFragment, SchemaRule};
