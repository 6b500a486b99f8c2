//! Plugin list resolution
//!
//! The resolved order is always `[override, ...user plugins, core]`. The
//! override plugin is synthesized from the handler-shaped fields supplied
//! directly to the orchestrator (never from its plugin list or change
//! callbacks); the core plugin is the baseline collaborator placed last.
//! The host re-resolves only when its plugin configuration changes;
//! unrelated configuration changes leave the list untouched.

use crate::event::EventKind;
use crate::plugin::{EventHook, Plugin, PluginList};

/// Name of the synthesized override plugin
pub const OVERRIDE_PLUGIN_NAME: &str = "override";

/// Per-event handler overrides supplied directly to the orchestrator
#[derive(Clone, Default)]
pub struct HandlerOverrides {
    pub on_before_input: Option<EventHook>,
    pub on_blur: Option<EventHook>,
    pub on_copy: Option<EventHook>,
    pub on_cut: Option<EventHook>,
    pub on_drop: Option<EventHook>,
    pub on_key_down: Option<EventHook>,
    pub on_paste: Option<EventHook>,
    pub on_select: Option<EventHook>,
}

impl HandlerOverrides {
    /// Creates an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override for one event
    pub fn set(&mut self, kind: EventKind, hook: EventHook) {
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
    }

    /// Returns the override for one event, if present
    pub fn get(&self, kind: EventKind) -> Option<&EventHook> {
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

    /// Returns true if no override is set
    pub fn is_empty(&self) -> bool {
        EventKind::ALL.iter().all(|k| self.get(*k).is_none())
    }
}

/// Resolves the deterministic ordered plugin list
///
/// Pure: the same inputs always produce the same order. The override plugin
/// is present even when no overrides are set, so list shape is stable.
pub fn resolve(overrides: &HandlerOverrides, user_plugins: Vec<Plugin>, core: Plugin) -> PluginList {
    let mut override_plugin = Plugin::new(OVERRIDE_PLUGIN_NAME);
    for kind in EventKind::ALL {
        if let Some(hook) = overrides.get(kind) {
            override_plugin = override_plugin.with_event_hook(kind, hook.clone());
        }
    }

    let mut plugins = Vec::with_capacity(user_plugins.len() + 2);
    plugins.push(override_plugin);
    plugins.extend(user_plugins);
    plugins.push(core);
    PluginList::new(plugins)
}
