//! Plugin capability record and resolved plugin list

use crate::error::{HookError, PluginError};
use crate::event::{EventKind, EventPayload};
use crate::schema::{Schema, SchemaFragment};
use editor_state::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Unique identifier for a plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginId(Uuid);

impl PluginId {
    /// Creates a new random plugin ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a plugin ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PluginId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plugin({})", self.0)
    }
}

/// Result of a single hook invocation
///
/// `Ok(Some(snapshot))` produces a new snapshot, `Ok(None)` declines to
/// participate, and `Err` aborts the surrounding dispatch or chain.
pub type HookResult = Result<Option<Snapshot>, HookError>;

/// Handle hooks receive back into the orchestrator
///
/// Supports re-entrancy: a hook may trigger a nested dispatch or commit,
/// which runs to full completion (including cache refresh) before control
/// returns to the outer chain.
pub trait EditorHandle {
    /// Returns the current authoritative snapshot
    fn current_snapshot(&self) -> Snapshot;

    /// Returns the composed schema
    fn current_schema(&self) -> Schema;

    /// Runs a nested dispatch through the plugin list
    fn dispatch_event(&mut self, payload: &EventPayload) -> Result<Option<Snapshot>, PluginError>;

    /// Runs a nested commit of a candidate snapshot
    fn commit(&mut self, candidate: Snapshot) -> Result<(), PluginError>;
}

/// Before-change / change hook: `(snapshot, handle) -> snapshot | no result`
pub type ChangeHook = Rc<dyn Fn(Snapshot, &mut dyn EditorHandle) -> HookResult>;

/// Event handler hook: `(payload, snapshot, handle) -> snapshot | no result`
pub type EventHook = Rc<dyn Fn(&EventPayload, Snapshot, &mut dyn EditorHandle) -> HookResult>;

/// A plugin: a fixed-shape record of optional capabilities
///
/// Every field except id and name is optional. A plugin lacking a
/// capability simply declines to participate; dispatch and chain walking
/// move on to the next plugin.
#[derive(Clone)]
pub struct Plugin {
    id: PluginId,
    name: String,
    schema: Option<SchemaFragment>,
    on_before_change: Option<ChangeHook>,
    on_change: Option<ChangeHook>,
    on_before_input: Option<EventHook>,
    on_blur: Option<EventHook>,
    on_copy: Option<EventHook>,
    on_cut: Option<EventHook>,
    on_drop: Option<EventHook>,
    on_key_down: Option<EventHook>,
    on_paste: Option<EventHook>,
    on_select: Option<EventHook>,
}

impl Plugin {
    /// Creates an empty plugin with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PluginId::new(),
            name: name.into(),
            schema: None,
            on_before_change: None,
            on_change: None,
            on_before_input: None,
            on_blur: None,
            on_copy: None,
            on_cut: None,
            on_drop: None,
            on_key_down: None,
            on_paste: None,
            on_select: None,
        }
    }

    /// Sets the schema fragment
    pub fn with_schema(mut self, fragment: SchemaFragment) -> Self {
        self.schema = Some(fragment);
        self
    }

    /// Sets the before-change hook
    pub fn with_before_change(
        mut self,
        hook: impl Fn(Snapshot, &mut dyn EditorHandle) -> HookResult + 'static,
    ) -> Self {
        self.on_before_change = Some(Rc::new(hook));
        self
    }

    /// Sets the change hook
    pub fn with_change(
        mut self,
        hook: impl Fn(Snapshot, &mut dyn EditorHandle) -> HookResult + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(hook));
        self
    }

    /// Sets the handler for one recognized event
    pub fn with_handler(
        self,
        kind: EventKind,
        hook: impl Fn(&EventPayload, Snapshot, &mut dyn EditorHandle) -> HookResult + 'static,
    ) -> Self {
        self.with_event_hook(kind, Rc::new(hook))
    }

    /// Sets an already-shared handler for one recognized event
    pub fn with_event_hook(mut self, kind: EventKind, hook: EventHook) -> Self {
        match kind {
            EventKind::BeforeInput => self.on_before_input = Some(hook),
            EventKind::Blur => self.on_blur = Some(hook),
            EventKind::Copy => self.on_copy = Some(hook),
            EventKind::Cut => self.on_cut = Some(hook),
            EventKind::Drop => self.on_drop = Some(hook),
            EventKind::KeyDown => self.on_key_down = Some(hook),
            EventKind::Paste => self.on_paste = Some(hook),
            EventKind::Select => self.on_select = Some(hook),
        }
        self
    }

    /// Returns the plugin ID
    pub fn id(&self) -> PluginId {
        self.id
    }

    /// Returns the plugin name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the schema fragment, if declared
    pub fn schema(&self) -> Option<&SchemaFragment> {
        self.schema.as_ref()
    }

    /// Returns the before-change hook, if declared
    pub fn before_change_hook(&self) -> Option<&ChangeHook> {
        self.on_before_change.as_ref()
    }

    /// Returns the change hook, if declared
    pub fn change_hook(&self) -> Option<&ChangeHook> {
        self.on_change.as_ref()
    }

    /// Returns the handler for an event, if declared
    pub fn handler(&self, kind: EventKind) -> Option<&EventHook> {
        match kind {
            EventKind::BeforeInput => self.on_before_input.as_ref(),
            EventKind::Blur => self.on_blur.as_ref(),
            EventKind::Copy => self.on_copy.as_ref(),
            EventKind::Cut => self.on_cut.as_ref(),
            EventKind::Drop => self.on_drop.as_ref(),
            EventKind::KeyDown => self.on_key_down.as_ref(),
            EventKind::Paste => self.on_paste.as_ref(),
            EventKind::Select => self.on_select.as_ref(),
        }
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<&str> = EventKind::ALL
            .iter()
            .filter(|k| self.handler(**k).is_some())
            .map(|k| k.as_str())
            .collect();
        f.debug_struct("Plugin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("schema", &self.schema.is_some())
            .field("before_change", &self.on_before_change.is_some())
            .field("change", &self.on_change.is_some())
            .field("handlers", &handlers)
            .finish()
    }
}

/// The resolved, ordered plugin list
///
/// Order is significant and fixed at resolution time. The list is shared
/// behind `Rc` so the orchestrator can iterate a stable handle while hooks
/// re-enter it.
#[derive(Debug, Clone)]
pub struct PluginList {
    plugins: Rc<[Plugin]>,
}

impl PluginList {
    /// Creates a plugin list from an ordered vector
    pub fn new(plugins: Vec<Plugin>) -> Self {
        Self {
            plugins: plugins.into(),
        }
    }

    /// Returns the plugins in order
    pub fn as_slice(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Iterates the plugins in order
    pub fn iter(&self) -> std::slice::Iter<'_, Plugin> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Returns the plugin at an index
    pub fn get(&self, index: usize) -> Option<&Plugin> {
        self.plugins.get(index)
    }
}
