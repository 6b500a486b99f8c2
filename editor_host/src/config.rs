//! Host-supplied orchestrator configuration

use editor_plugins::{
    EditorHandle, EventKind, EventPayload, HandlerOverrides, HookResult, Plugin, SchemaFragment,
};
use editor_state::{Document, Selection, Snapshot};
use std::rc::Rc;

/// Callback fired after every committed change
pub type ChangeCallback = Rc<dyn Fn(&Snapshot)>;

/// Callback fired when the committed document identity differs from the cache
pub type DocumentChangeCallback = Rc<dyn Fn(&Document, &Snapshot)>;

/// Callback fired when the committed selection identity differs from the cache
pub type SelectionChangeCallback = Rc<dyn Fn(&Selection, &Snapshot)>;

/// Configuration consumed by [`crate::EditorHost::new`]
///
/// Carries the ordered user plugin list, an optional schema override
/// fragment, the initial snapshot, the three change callbacks, and one
/// optional handler per recognized event name. The per-event handlers are
/// folded into the synthetic override plugin at resolution time; the
/// callbacks and plugin list never are.
#[derive(Default)]
pub struct EditorConfig {
    pub(crate) plugins: Vec<Plugin>,
    pub(crate) schema: Option<SchemaFragment>,
    pub(crate) initial_snapshot: Option<Snapshot>,
    pub(crate) on_change: Option<ChangeCallback>,
    pub(crate) on_document_change: Option<DocumentChangeCallback>,
    pub(crate) on_selection_change: Option<SelectionChangeCallback>,
    pub(crate) handlers: HandlerOverrides,
}

impl EditorConfig {
    /// Creates an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordered user plugin list
    pub fn with_plugins(mut self, plugins: Vec<Plugin>) -> Self {
        self.plugins = plugins;
        self
    }

    /// Appends one user plugin
    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Sets the explicit schema override fragment
    pub fn with_schema(mut self, fragment: SchemaFragment) -> Self {
        self.schema = Some(fragment);
        self
    }

    /// Sets the initial snapshot
    pub fn with_initial_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.initial_snapshot = Some(snapshot);
        self
    }

    /// Sets the change callback
    pub fn with_change_callback(mut self, callback: impl Fn(&Snapshot) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    /// Sets the document-change callback
    pub fn with_document_change_callback(
        mut self,
        callback: impl Fn(&Document, &Snapshot) + 'static,
    ) -> Self {
        self.on_document_change = Some(Rc::new(callback));
        self
    }

    /// Sets the selection-change callback
    pub fn with_selection_change_callback(
        mut self,
        callback: impl Fn(&Selection, &Snapshot) + 'static,
    ) -> Self {
        self.on_selection_change = Some(Rc::new(callback));
        self
    }

    /// Sets a direct handler for one recognized event
    ///
    /// Direct handlers outrank every plugin: they form the synthetic
    /// override plugin at the head of the resolved list.
    pub fn with_handler(
        mut self,
        kind: EventKind,
        hook: impl Fn(&EventPayload, Snapshot, &mut dyn EditorHandle) -> HookResult + 'static,
    ) -> Self {
        self.handlers.set(kind, Rc::new(hook));
        self
    }
}
