//! Recognized UI events
//!
//! The event vocabulary is fixed and statically enumerated; there is no
//! dynamic event registration. Payloads are typed per event, not argument
//! bags.

use editor_state::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The recognized UI event names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    BeforeInput,
    Blur,
    Copy,
    Cut,
    Drop,
    KeyDown,
    Paste,
    Select,
}

impl EventKind {
    /// All recognized events, in canonical order
    pub const ALL: [EventKind; 8] = [
        EventKind::BeforeInput,
        EventKind::Blur,
        EventKind::Copy,
        EventKind::Cut,
        EventKind::Drop,
        EventKind::KeyDown,
        EventKind::Paste,
        EventKind::Select,
    ];

    /// Returns the canonical hyphenated event name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::BeforeInput => "before-input",
            EventKind::Blur => "blur",
            EventKind::Copy => "copy",
            EventKind::Cut => "cut",
            EventKind::Drop => "drop",
            EventKind::KeyDown => "key-down",
            EventKind::Paste => "paste",
            EventKind::Select => "select",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key identity for key-down events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Modifier keys active during a key-down event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers active
    pub const fn none() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyInput {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Creates a key input
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates an unmodified character key
    pub fn char(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), Modifiers::none())
    }
}

/// Typed payload for a recognized event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventPayload {
    BeforeInput { text: String },
    Blur,
    Copy,
    Cut,
    Drop { text: String, at: Position },
    KeyDown(KeyInput),
    Paste { text: String },
    Select { anchor: Position, focus: Position },
}

impl EventPayload {
    /// Returns the event name this payload belongs to
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::BeforeInput { .. } => EventKind::BeforeInput,
            EventPayload::Blur => EventKind::Blur,
            EventPayload::Copy => EventKind::Copy,
            EventPayload::Cut => EventKind::Cut,
            EventPayload::Drop { .. } => EventKind::Drop,
            EventPayload::KeyDown(_) => EventKind::KeyDown,
            EventPayload::Paste { .. } => EventKind::Paste,
            EventPayload::Select { .. } => EventKind::Select,
        }
    }
}
