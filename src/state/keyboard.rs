//! Keyboard Module - Key event types
//!
//! The event shape every field interpreter consumes, independent of where the
//! key came from (terminal, browser bridge, test).
//!
//! # Example
//!
//! ```ignore
//! use spark_passcode::state::{KeyboardEvent, Modifiers};
//!
//! let paste = KeyboardEvent::with_modifiers("v", Modifiers::ctrl());
//! assert!(paste.is_paste_shortcut());
//!
//! let back = KeyboardEvent::new("Backspace");
//! assert!(back.is_deletion());
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with meta (cmd on macOS)
    pub fn meta() -> Self {
        Self { meta: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// Ctrl, meta or alt held. Shift alone does not count.
    pub fn is_platform(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Backspace", "Tab")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// `v` with ctrl, meta or alt: a paste is about to happen.
    pub fn is_paste_shortcut(&self) -> bool {
        self.key == "v" && self.modifiers.is_platform()
    }

    /// Backspace or Delete
    pub fn is_deletion(&self) -> bool {
        self.key == "Backspace" || self.key == "Delete"
    }

    pub fn is_tab(&self) -> bool {
        self.key == "Tab"
    }

    /// The character this key would insert, if it is a single character.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// What the host should do with the native default of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventOutcome {
    /// Let the native input apply its default edit.
    #[default]
    Pass,
    /// Suppress the native default (`preventDefault`).
    Suppress,
}

impl EventOutcome {
    pub fn is_suppressed(self) -> bool {
        self == EventOutcome::Suppress
    }
}

// =============================================================================
// TESTS
// =============================================================================
