//! The editor orchestrator

use crate::audit::AuditEvent;
use crate::cache::StateCache;
use crate::config::{
    ChangeCallback, DocumentChangeCallback, EditorConfig, SelectionChangeCallback,
};
use editor_plugins::{
    compose, core_plugin, resolve, EditorHandle, EventPayload, HandlerOverrides, KeyInput, Plugin,
    PluginError, PluginList, Schema, SchemaFragment,
};
use editor_state::{transform, Position, Snapshot};

/// The editor orchestrator
///
/// Owns the authoritative snapshot, the resolved plugin list, the composed
/// schema, and the last-notified state cache. One instance, one logical
/// thread of control; hooks re-enter through [`EditorHandle`].
pub struct EditorHost {
    plugins: PluginList,
    schema: Schema,
    schema_override: Option<SchemaFragment>,
    overrides: HandlerOverrides,
    state: Snapshot,
    cache: StateCache,
    on_change: Option<ChangeCallback>,
    on_document_change: Option<DocumentChangeCallback>,
    on_selection_change: Option<SelectionChangeCallback>,
    audit: Vec<AuditEvent>,
}

impl EditorHost {
    /// Creates a host from its configuration
    ///
    /// Resolves the plugin list once, composes the schema, and seeds the
    /// cache from the initial snapshot.
    pub fn new(config: EditorConfig) -> Self {
        let EditorConfig {
            plugins: user_plugins,
            schema: schema_override,
            initial_snapshot,
            on_change,
            on_document_change,
            on_selection_change,
            handlers: overrides,
        } = config;

        let plugins = resolve(&overrides, user_plugins, core_plugin());
        let schema = compose(&plugins, schema_override.as_ref());
        let state = initial_snapshot.unwrap_or_else(Snapshot::empty);
        let cache = StateCache::new(&state);

        Self {
            plugins,
            schema,
            schema_override,
            overrides,
            state,
            cache,
            on_change,
            on_document_change,
            on_selection_change,
            audit: Vec::new(),
        }
    }

    /// Returns the authoritative snapshot
    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// Returns the composed schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the resolved plugin list
    pub fn plugins(&self) -> &PluginList {
        &self.plugins
    }

    /// Returns the last-notified state cache
    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    /// Returns the audit trail
    pub fn audit_trail(&self) -> &[AuditEvent] {
        &self.audit
    }

    /// Clears the audit trail
    pub fn clear_audit_trail(&mut self) {
        self.audit.clear();
    }

    /// Replaces the user plugin list, re-resolving and recomposing
    ///
    /// This is the only operation that rebuilds the plugin list; changing
    /// the schema override alone leaves the list untouched.
    pub fn set_plugins(&mut self, user_plugins: Vec<Plugin>) {
        self.plugins = resolve(&self.overrides, user_plugins, core_plugin());
        self.schema = compose(&self.plugins, self.schema_override.as_ref());
    }

    /// Replaces the schema override fragment and recomposes the schema
    pub fn set_schema(&mut self, fragment: SchemaFragment) {
        self.schema_override = Some(fragment);
        self.schema = compose(&self.plugins, self.schema_override.as_ref());
    }

    /// Routes an event through the plugin list, first match wins
    ///
    /// Walks the list strictly in order. The first handler that returns a
    /// snapshot ends the walk; handlers that decline pass the event on.
    /// Returns `None` when no plugin produced a snapshot.
    pub fn dispatch(&mut self, payload: &EventPayload) -> Result<Option<Snapshot>, PluginError> {
        let kind = payload.kind();
        let plugins = self.plugins.clone();
        for plugin in plugins.iter() {
            let Some(handler) = plugin.handler(kind) else {
                continue;
            };
            let snapshot = self.state.clone();
            let outcome =
                handler.as_ref()(payload, snapshot, self).map_err(|source| {
                    PluginError::Dispatch {
                        plugin: plugin.name().to_string(),
                        event: kind,
                        source,
                    }
                })?;
            if let Some(next) = outcome {
                self.audit.push(AuditEvent::EventDispatched {
                    event: kind,
                    handled_by: Some(plugin.name().to_string()),
                });
                return Ok(Some(next));
            }
        }
        self.audit.push(AuditEvent::EventDispatched {
            event: kind,
            handled_by: None,
        });
        Ok(None)
    }

    /// Dispatches an event and commits the resulting snapshot, if any
    pub fn handle_event(&mut self, payload: EventPayload) -> Result<(), PluginError> {
        if let Some(next) = self.dispatch(&payload)? {
            self.commit_change(next)?;
        }
        Ok(())
    }

    /// Accepts an externally supplied snapshot
    ///
    /// Identity-equal candidates return unchanged with no further work.
    /// Otherwise the before-change chain runs in plugin order, the result
    /// becomes authoritative, and the cache refreshes — without firing any
    /// change callbacks. An error in the chain commits nothing.
    pub fn accept_external_state(&mut self, candidate: Snapshot) -> Result<Snapshot, PluginError> {
        if candidate.same_version(&self.state) {
            return Ok(self.state.clone());
        }

        let mut running = candidate;
        let plugins = self.plugins.clone();
        for plugin in plugins.iter() {
            let Some(hook) = plugin.before_change_hook() else {
                continue;
            };
            let outcome = hook.as_ref()(running.clone(), self).map_err(|source| {
                PluginError::BeforeChange {
                    plugin: plugin.name().to_string(),
                    source,
                }
            })?;
            if let Some(next) = outcome {
                running = next;
            }
        }

        self.cache.refresh(&running);
        self.audit.push(AuditEvent::ExternalStateAccepted {
            version: running.version(),
        });
        self.state = running;
        Ok(self.state.clone())
    }

    /// Commits an internally produced snapshot
    ///
    /// Identity-equal candidates are a silent no-op. Otherwise the change
    /// chain runs in plugin order, then the change callback fires, the
    /// document/selection callbacks fire exactly when their identity tokens
    /// differ from the cache, and the cache refreshes unconditionally. An
    /// error in the chain commits nothing and fires nothing.
    pub fn commit_change(&mut self, candidate: Snapshot) -> Result<(), PluginError> {
        if candidate.same_version(&self.state) {
            return Ok(());
        }

        let mut running = candidate;
        let plugins = self.plugins.clone();
        for plugin in plugins.iter() {
            let Some(hook) = plugin.change_hook() else {
                continue;
            };
            let outcome =
                hook.as_ref()(running.clone(), self).map_err(|source| PluginError::Change {
                    plugin: plugin.name().to_string(),
                    source,
                })?;
            if let Some(next) = outcome {
                running = next;
            }
        }

        let document_changed = self.cache.document_changed(&running);
        let selection_changed = self.cache.selection_changed(&running);
        self.state = running.clone();

        if let Some(callback) = &self.on_change {
            callback.as_ref()(&running);
        }
        if document_changed {
            if let Some(callback) = &self.on_document_change {
                callback.as_ref()(running.document(), &running);
            }
            self.audit.push(AuditEvent::DocumentChangeNotified {
                revision: running.document().revision(),
            });
        }
        if selection_changed {
            if let Some(callback) = &self.on_selection_change {
                callback.as_ref()(running.selection(), &running);
            }
            self.audit.push(AuditEvent::SelectionChangeNotified {
                revision: running.selection().revision(),
            });
        }

        self.cache.refresh(&running);
        self.audit.push(AuditEvent::ChangeCommitted {
            version: running.version(),
        });
        Ok(())
    }

    /// Focuses the selection and commits the new snapshot
    ///
    /// Goes through the transform facility and straight into
    /// [`Self::commit_change`], bypassing event dispatch. Always produces a
    /// new snapshot instance, so selection-change fires even when the
    /// selection was already focused.
    pub fn focus(&mut self) -> Result<(), PluginError> {
        let next = transform::focus(&self.state);
        self.commit_change(next)
    }

    /// Blurs the selection and commits the new snapshot
    pub fn blur(&mut self) -> Result<(), PluginError> {
        let next = transform::blur(&self.state);
        self.commit_change(next)
    }

    // Dispatch adapters, one per recognized event.

    pub fn handle_before_input(&mut self, text: impl Into<String>) -> Result<(), PluginError> {
        self.handle_event(EventPayload::BeforeInput { text: text.into() })
    }

    pub fn handle_blur(&mut self) -> Result<(), PluginError> {
        self.handle_event(EventPayload::Blur)
    }

    pub fn handle_copy(&mut self) -> Result<(), PluginError> {
        self.handle_event(EventPayload::Copy)
    }

    pub fn handle_cut(&mut self) -> Result<(), PluginError> {
        self.handle_event(EventPayload::Cut)
    }

    pub fn handle_drop(&mut self, text: impl Into<String>, at: Position) -> Result<(), PluginError> {
        self.handle_event(EventPayload::Drop {
            text: text.into(),
            at,
        })
    }

    pub fn handle_key_down(&mut self, key: KeyInput) -> Result<(), PluginError> {
        self.handle_event(EventPayload::KeyDown(key))
    }

    pub fn handle_paste(&mut self, text: impl Into<String>) -> Result<(), PluginError> {
        self.handle_event(EventPayload::Paste { text: text.into() })
    }

    pub fn handle_select(&mut self, anchor: Position, focus: Position) -> Result<(), PluginError> {
        self.handle_event(EventPayload::Select { anchor, focus })
    }
}

impl EditorHandle for EditorHost {
    fn current_snapshot(&self) -> Snapshot {
        self.state.clone()
    }

    fn current_schema(&self) -> Schema {
        self.schema.clone()
    }

    fn dispatch_event(&mut self, payload: &EventPayload) -> Result<Option<Snapshot>, PluginError> {
        self.dispatch(payload)
    }

    fn commit(&mut self, candidate: Snapshot) -> Result<(), PluginError> {
        self.commit_change(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_plugins::{EventKind, HookError, RuleSpec};
    use editor_state::{Document, Selection};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(
            Document::from_text("hello"),
            Selection::collapsed(Position::new(0, 5)),
        )
    }

    fn host_with(config: EditorConfig) -> EditorHost {
        EditorHost::new(config.with_initial_snapshot(sample_snapshot()))
    }

    #[test]
    fn test_first_snapshot_wins_and_later_handlers_are_skipped() {
        let invoked = Rc::new(RefCell::new(Vec::new()));

        let passthrough = {
            let invoked = invoked.clone();
            Plugin::new("passthrough").with_handler(EventKind::KeyDown, move |_, _, _| {
                invoked.borrow_mut().push("passthrough");
                Ok(None)
            })
        };
        let winner = {
            let invoked = invoked.clone();
            Plugin::new("winner").with_handler(EventKind::KeyDown, move |_, snapshot, _| {
                invoked.borrow_mut().push("winner");
                Ok(Some(transform::set_document(
                    &snapshot,
                    Document::from_text("won"),
                )))
            })
        };
        let unreachable = {
            let invoked = invoked.clone();
            Plugin::new("unreachable").with_handler(EventKind::KeyDown, move |_, snapshot, _| {
                invoked.borrow_mut().push("unreachable");
                Ok(Some(snapshot))
            })
        };

        let mut host = host_with(
            EditorConfig::new().with_plugins(vec![passthrough, winner, unreachable]),
        );
        host.handle_key_down(KeyInput::char('x')).unwrap();

        assert_eq!(*invoked.borrow(), ["passthrough", "winner"]);
        assert_eq!(host.snapshot().document().as_text(), "won");
    }

    #[test]
    fn test_unclaimed_event_produces_no_result_and_no_change() {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let mut host = host_with(
            EditorConfig::new().with_change_callback(move |_| counter.set(counter.get() + 1)),
        );
        let before = host.snapshot().version();

        // No plugin (core included) claims key-down by default.
        host.handle_key_down(KeyInput::char('q')).unwrap();

        assert_eq!(host.snapshot().version(), before);
        assert_eq!(changes.get(), 0);
        assert_eq!(
            host.audit_trail(),
            [AuditEvent::EventDispatched {
                event: EventKind::KeyDown,
                handled_by: None,
            }]
        );
    }

    #[test]
    fn test_before_input_falls_through_to_core() {
        let docs = Rc::new(RefCell::new(Vec::new()));
        let seen = docs.clone();
        let mut host = host_with(EditorConfig::new().with_document_change_callback(
            move |document, _| seen.borrow_mut().push(document.as_text()),
        ));

        host.handle_before_input(", world").unwrap();

        assert_eq!(host.snapshot().document().as_text(), "hello, world");
        assert_eq!(*docs.borrow(), ["hello, world"]);
    }

    #[test]
    fn test_before_input_inside_multibyte_char_snaps_to_boundary() {
        let mut host = EditorHost::new(EditorConfig::new().with_initial_snapshot(Snapshot::new(
            Document::from_text("héllo"),
            Selection::collapsed(Position::zero()),
        )));

        // Byte 2 lands inside the two-byte 'é'; the core insert must snap
        // to the boundary before it rather than unwind.
        host.handle_select(Position::new(0, 2), Position::new(0, 2))
            .unwrap();
        host.handle_before_input("x").unwrap();

        assert_eq!(host.snapshot().document().as_text(), "hxéllo");
        assert_eq!(host.snapshot().selection().focus(), Position::new(0, 2));
    }

    #[test]
    fn test_before_chain_threads_replacement_to_later_hooks() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Plugin::new("first").with_before_change(|snapshot, _| {
            Ok(Some(transform::set_document(
                &snapshot,
                Document::from_text("first"),
            )))
        });
        let second = {
            let seen = seen.clone();
            Plugin::new("second").with_before_change(move |snapshot, _| {
                seen.borrow_mut().push(snapshot.document().as_text());
                let appended = format!("{}+second", snapshot.document().as_text());
                Ok(Some(transform::set_document(
                    &snapshot,
                    Document::from_text(&appended),
                )))
            })
        };
        let mut host = host_with(EditorConfig::new().with_plugins(vec![first, second]));

        let candidate = Snapshot::new(
            Document::from_text("external"),
            Selection::collapsed(Position::zero()),
        );
        let accepted = host.accept_external_state(candidate).unwrap();

        // The second hook received the first hook's output, not the
        // original candidate.
        assert_eq!(*seen.borrow(), ["first"]);
        assert_eq!(accepted.document().as_text(), "first+second");
    }

    #[test]
    fn test_change_chain_threads_replacement_to_later_hooks() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Plugin::new("first").with_change(|snapshot, _| {
            Ok(Some(transform::set_document(
                &snapshot,
                Document::from_text("first"),
            )))
        });
        let second = {
            let seen = seen.clone();
            Plugin::new("second").with_change(move |snapshot, _| {
                seen.borrow_mut().push(snapshot.document().as_text());
                let appended = format!("{}+second", snapshot.document().as_text());
                Ok(Some(transform::set_document(
                    &snapshot,
                    Document::from_text(&appended),
                )))
            })
        };
        let mut host = host_with(EditorConfig::new().with_plugins(vec![first, second]));

        let candidate = transform::set_document(host.snapshot(), Document::from_text("outer"));
        host.commit_change(candidate).unwrap();

        assert_eq!(*seen.borrow(), ["first"]);
        assert_eq!(host.snapshot().document().as_text(), "first+second");
    }

    #[test]
    fn test_override_handler_outranks_user_plugins() {
        let user = Plugin::new("user").with_handler(EventKind::Paste, |_, snapshot, _| {
            Ok(Some(transform::set_document(
                &snapshot,
                Document::from_text("user"),
            )))
        });
        let mut host = host_with(
            EditorConfig::new()
                .with_plugin(user)
                .with_handler(EventKind::Paste, |_, snapshot, _| {
                    Ok(Some(transform::set_document(
                        &snapshot,
                        Document::from_text("override"),
                    )))
                }),
        );

        host.handle_paste("ignored").unwrap();
        assert_eq!(host.snapshot().document().as_text(), "override");
    }

    #[test]
    fn test_commit_identity_noop_fires_nothing() {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let mut host = host_with(
            EditorConfig::new().with_change_callback(move |_| counter.set(counter.get() + 1)),
        );

        let same = host.snapshot().clone();
        host.commit_change(same).unwrap();

        assert_eq!(changes.get(), 0);
        assert!(host.audit_trail().is_empty());
    }

    #[test]
    fn test_accept_external_identity_noop_skips_chain() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let plugin = Plugin::new("before").with_before_change(move |_, _| {
            flag.set(true);
            Ok(None)
        });
        let mut host = host_with(EditorConfig::new().with_plugin(plugin));

        let same = host.snapshot().clone();
        host.accept_external_state(same).unwrap();

        assert!(!ran.get());
        assert!(host.audit_trail().is_empty());
    }

    #[test]
    fn test_accept_external_runs_chain_and_refreshes_cache_without_callbacks() {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let plugin = Plugin::new("normalizer").with_before_change(|snapshot, _| {
            Ok(Some(transform::set_document(
                &snapshot,
                Document::from_text("normalized"),
            )))
        });
        let mut host = host_with(
            EditorConfig::new()
                .with_plugin(plugin)
                .with_change_callback(move |_| counter.set(counter.get() + 1)),
        );

        let candidate = Snapshot::new(
            Document::from_text("external"),
            Selection::collapsed(Position::zero()),
        );
        let accepted = host.accept_external_state(candidate).unwrap();

        assert_eq!(accepted.document().as_text(), "normalized");
        assert!(host.snapshot().same_version(&accepted));
        assert_eq!(
            host.cache().document_revision(),
            accepted.document().revision()
        );
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn test_new_document_identity_fires_document_change_even_if_content_equal() {
        let fired = Rc::new(Cell::new(false));
        let selection_fired = Rc::new(Cell::new(false));
        let doc_flag = fired.clone();
        let sel_flag = selection_fired.clone();
        let mut host = host_with(
            EditorConfig::new()
                .with_document_change_callback(move |_, _| doc_flag.set(true))
                .with_selection_change_callback(move |_, _| sel_flag.set(true)),
        );

        // Content-equal document, fresh identity; selection carried through.
        let next = transform::set_document(host.snapshot(), Document::from_text("hello"));
        host.commit_change(next).unwrap();

        assert!(fired.get());
        assert!(!selection_fired.get());
    }

    #[test]
    fn test_focus_fires_selection_change_even_when_already_focused() {
        let selections = Rc::new(Cell::new(0));
        let counter = selections.clone();
        let mut host = host_with(
            EditorConfig::new().with_selection_change_callback(move |_, _| {
                counter.set(counter.get() + 1)
            }),
        );

        host.focus().unwrap();
        assert!(host.snapshot().selection().is_focused());
        host.focus().unwrap();

        assert_eq!(selections.get(), 2);
    }

    #[test]
    fn test_blur_commits_new_snapshot() {
        let mut host = host_with(EditorConfig::new());
        host.focus().unwrap();
        host.blur().unwrap();
        assert!(!host.snapshot().selection().is_focused());
    }

    #[test]
    fn test_failed_change_chain_commits_and_fires_nothing() {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let failing = Plugin::new("failing")
            .with_change(|_, _| Err(HookError::new("change hook refused")));
        let mut host = host_with(
            EditorConfig::new()
                .with_plugin(failing)
                .with_change_callback(move |_| counter.set(counter.get() + 1)),
        );

        let before_version = host.snapshot().version();
        let before_cache = *host.cache();
        let candidate = transform::focus(host.snapshot());

        let err = host.commit_change(candidate).unwrap_err();
        assert!(matches!(err, PluginError::Change { .. }));
        assert_eq!(host.snapshot().version(), before_version);
        assert_eq!(*host.cache(), before_cache);
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn test_failed_before_chain_preserves_state_and_propagates() {
        let failing = Plugin::new("failing")
            .with_before_change(|_, _| Err(HookError::new("rejected")));
        let mut host = host_with(EditorConfig::new().with_plugin(failing));

        let before_version = host.snapshot().version();
        let before_cache = *host.cache();
        let candidate = Snapshot::new(
            Document::from_text("external"),
            Selection::collapsed(Position::zero()),
        );

        let err = host.accept_external_state(candidate).unwrap_err();
        assert!(matches!(err, PluginError::BeforeChange { .. }));
        assert_eq!(host.snapshot().version(), before_version);
        assert_eq!(*host.cache(), before_cache);
    }

    #[test]
    fn test_reentrant_commit_completes_before_outer_chain() {
        let triggered = Rc::new(Cell::new(false));
        let changes = Rc::new(RefCell::new(Vec::new()));
        let seen = changes.clone();
        let flag = triggered.clone();
        let reentrant = Plugin::new("reentrant").with_change(move |_, handle| {
            if !flag.get() {
                flag.set(true);
                let nested = transform::focus(&handle.current_snapshot());
                handle
                    .commit(nested)
                    .map_err(|err| HookError::new(err.to_string()))?;
            }
            Ok(None)
        });

        let mut host = host_with(
            EditorConfig::new()
                .with_plugin(reentrant)
                .with_change_callback(move |snapshot| {
                    seen.borrow_mut().push(snapshot.document().as_text())
                }),
        );

        let outer = transform::set_document(host.snapshot(), Document::from_text("outer"));
        host.commit_change(outer).unwrap();

        // Nested commit finished (callback fired) before the outer one.
        assert_eq!(*changes.borrow(), ["hello", "outer"]);
        assert_eq!(host.snapshot().document().as_text(), "outer");
        assert_eq!(
            host.cache().document_revision(),
            host.snapshot().document().revision()
        );
    }

    #[test]
    fn test_set_schema_leaves_plugin_list_untouched() {
        let mut host = host_with(EditorConfig::new().with_plugin(Plugin::new("user")));
        let ids: Vec<_> = host.plugins().iter().map(|p| p.id()).collect();

        host.set_schema(SchemaFragment::new().with_document_rule(RuleSpec::new("override")));

        let ids_after: Vec<_> = host.plugins().iter().map(|p| p.id()).collect();
        assert_eq!(ids, ids_after);
        assert_eq!(host.schema().rules()[0].directive, "override");
    }

    #[test]
    fn test_set_plugins_rebuilds_list_and_schema() {
        let mut host = host_with(EditorConfig::new());
        assert_eq!(host.plugins().len(), 2);

        let contributing = Plugin::new("contributing")
            .with_schema(SchemaFragment::new().with_document_rule(RuleSpec::new("rule")));
        host.set_plugins(vec![contributing]);

        assert_eq!(host.plugins().len(), 3);
        assert_eq!(host.plugins().get(1).unwrap().name(), "contributing");
        assert_eq!(host.schema().len(), 1);
    }

    #[test]
    fn test_select_updates_selection_via_core() {
        let mut host = host_with(EditorConfig::new());
        host.handle_select(Position::zero(), Position::new(0, 3))
            .unwrap();
        assert_eq!(host.snapshot().selection().focus(), Position::new(0, 3));
        assert!(!host.snapshot().selection().is_collapsed());
    }

    #[test]
    fn test_audit_trail_records_and_clears() {
        let mut host = host_with(EditorConfig::new());
        host.focus().unwrap();
        assert!(host
            .audit_trail()
            .iter()
            .any(|e| matches!(e, AuditEvent::ChangeCommitted { .. })));
        assert!(host
            .audit_trail()
            .iter()
            .any(|e| matches!(e, AuditEvent::SelectionChangeNotified { .. })));

        host.clear_audit_trail();
        assert!(host.audit_trail().is_empty());
    }
}
