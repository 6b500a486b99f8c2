//! Structured audit trail of orchestrator activity
//!
//! Typed events, not log lines. The host appends an entry for every
//! dispatch, accepted external state, committed change, and fired
//! notification; the trail grows until the host clears it.

use editor_plugins::EventKind;
use editor_state::{DocumentRevision, SelectionRevision, SnapshotVersion};
use serde::{Deserialize, Serialize};

/// A single audited orchestrator event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditEvent {
    /// A UI event was routed through the plugin list
    EventDispatched {
        event: EventKind,
        /// Name of the plugin that produced a snapshot, if any
        handled_by: Option<String>,
    },
    /// An externally supplied snapshot became authoritative
    ExternalStateAccepted { version: SnapshotVersion },
    /// A change chain completed and its snapshot became authoritative
    ChangeCommitted { version: SnapshotVersion },
    /// The document-change callback gate opened
    DocumentChangeNotified { revision: DocumentRevision },
    /// The selection-change callback gate opened
    SelectionChangeNotified { revision: SelectionRevision },
}
