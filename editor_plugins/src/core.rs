//! Baseline core plugin
//!
//! The core plugin sits last in every resolved list and supplies default
//! editing behavior for events no earlier plugin claimed. It goes through
//! the same transform facility as everything else; it has no special
//! authority beyond its position.

use crate::event::{EventKind, EventPayload};
use crate::plugin::Plugin;
use editor_state::transform;

/// Name of the baseline core plugin
pub const CORE_PLUGIN_NAME: &str = "core";

/// Builds the baseline plugin placed last in the resolved list
pub fn core_plugin() -> Plugin {
    Plugin::new(CORE_PLUGIN_NAME)
        .with_handler(EventKind::BeforeInput, |payload, snapshot, _handle| {
            let EventPayload::BeforeInput { text } = payload else {
                return Ok(None);
            };
            Ok(Some(transform::insert_text(&snapshot, text)))
        })
        .with_handler(EventKind::Select, |payload, snapshot, _handle| {
            let EventPayload::Select { anchor, focus } = payload else {
                return Ok(None);
            };
            Ok(Some(transform::select(&snapshot, *anchor, *focus)))
        })
        .with_handler(EventKind::Blur, |payload, snapshot, _handle| {
            let EventPayload::Blur = payload else {
                return Ok(None);
            };
            Ok(Some(transform::blur(&snapshot)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PluginError;
    use crate::plugin::EditorHandle;
    use crate::schema::Schema;
    use editor_state::{Document, Position, Selection, Snapshot};

    struct StubHandle {
        snapshot: Snapshot,
    }

    impl EditorHandle for StubHandle {
        fn current_snapshot(&self) -> Snapshot {
            self.snapshot.clone()
        }

        fn current_schema(&self) -> Schema {
            Schema::default()
        }

        fn dispatch_event(
            &mut self,
            _payload: &EventPayload,
        ) -> Result<Option<Snapshot>, PluginError> {
            Ok(None)
        }

        fn commit(&mut self, _candidate: Snapshot) -> Result<(), PluginError> {
            Ok(())
        }
    }

    fn sample() -> Snapshot {
        Snapshot::new(
            Document::from_text("hi"),
            Selection::collapsed(Position::new(0, 2)),
        )
    }

    #[test]
    fn test_core_inserts_text_on_before_input() {
        let core = core_plugin();
        let snapshot = sample();
        let mut handle = StubHandle {
            snapshot: snapshot.clone(),
        };

        let handler = core.handler(EventKind::BeforeInput).unwrap();
        let payload = EventPayload::BeforeInput {
            text: " there".to_string(),
        };
        let result = handler.as_ref()(&payload, snapshot, &mut handle)
            .unwrap()
            .unwrap();
        assert_eq!(result.document().as_text(), "hi there");
    }

    #[test]
    fn test_core_applies_select_range() {
        let core = core_plugin();
        let snapshot = sample();
        let mut handle = StubHandle {
            snapshot: snapshot.clone(),
        };

        let handler = core.handler(EventKind::Select).unwrap();
        let payload = EventPayload::Select {
            anchor: Position::zero(),
            focus: Position::new(0, 1),
        };
        let result = handler.as_ref()(&payload, snapshot, &mut handle)
            .unwrap()
            .unwrap();
        assert_eq!(result.selection().focus(), Position::new(0, 1));
    }

    #[test]
    fn test_core_blurs_selection() {
        let core = core_plugin();
        let snapshot = transform::focus(&sample());
        let mut handle = StubHandle {
            snapshot: snapshot.clone(),
        };

        let handler = core.handler(EventKind::Blur).unwrap();
        let result = handler.as_ref()(&EventPayload::Blur, snapshot, &mut handle)
            .unwrap()
            .unwrap();
        assert!(!result.selection().is_focused());
    }

    #[test]
    fn test_core_declines_unclaimed_events() {
        let core = core_plugin();
        assert!(core.handler(EventKind::KeyDown).is_none());
        assert!(core.handler(EventKind::Copy).is_none());
        assert!(core.handler(EventKind::Cut).is_none());
        assert!(core.handler(EventKind::Drop).is_none());
        assert!(core.handler(EventKind::Paste).is_none());
    }
}
