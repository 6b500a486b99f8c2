//! Event vocabulary contract tests
//!
//! These tests define the stable set of recognized event names. Adding,
//! removing, or renaming an event is a contract change and must fail here.

// ===== Canonical Event Names =====
pub const EVENT_BEFORE_INPUT: &str = "before-input";
pub const EVENT_BLUR: &str = "blur";
pub const EVENT_COPY: &str = "copy";
pub const EVENT_CUT: &str = "cut";
pub const EVENT_DROP: &str = "drop";
pub const EVENT_KEY_DOWN: &str = "key-down";
pub const EVENT_PASTE: &str = "paste";
pub const EVENT_SELECT: &str = "select";

/// The recognized event names, in canonical order
pub const RECOGNIZED_EVENTS: [&str; 8] = [
    EVENT_BEFORE_INPUT,
    EVENT_BLUR,
    EVENT_COPY,
    EVENT_CUT,
    EVENT_DROP,
    EVENT_KEY_DOWN,
    EVENT_PASTE,
    EVENT_SELECT,
];

// ===== Contract Tests =====
