//! Input Module - Terminal event conversion
//!
//! Bridges crossterm's event system with the passcode event types.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `convert_event` - Convert any crossterm Event to an InputEvent
//! - `poll_event` / `read_event` - Terminal event reads
//! - `route_event` - Feed an InputEvent into a mounted passcode
//! - `enable_paste` / `disable_paste` - Bracketed paste and focus reporting
//!
//! # Example
//!
//! ```ignore
//! use spark_passcode::state::input::{enable_paste, poll_event, route_event};
//! use std::time::Duration;
//!
//! enable_paste()?;
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(&mut passcode, event);
//!     }
//! }
//! ```

use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};
use crate::primitives::Passcode;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Terminal events the passcode cares about
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key press, repeat or release
    Key(KeyboardEvent),
    /// Bracketed paste content
    Paste(String),
    /// Terminal window gained focus
    FocusGained,
    /// Terminal window lost focus
    FocusLost,
    /// Anything else
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let mut modifiers = convert_modifiers(event.modifiers);

    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            modifiers.shift = true;
            "Tab".to_string()
        }
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent { key, modifiers, state }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    }
}

/// Convert a crossterm Event
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::Paste(text) => InputEvent::Paste(text),
        CrosstermEvent::FocusGained => InputEvent::FocusGained,
        CrosstermEvent::FocusLost => InputEvent::FocusLost,
        _ => InputEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event into a mounted passcode.
/// Returns true if the passcode handled it.
pub fn route_event(passcode: &mut Passcode, event: InputEvent) -> bool {
    match event {
        InputEvent::Key(key) => {
            if passcode.native_focus().is_none() {
                return false;
            }
            passcode.key_down(&key);
            true
        }
        InputEvent::Paste(text) => passcode.paste(&text).is_some(),
        InputEvent::FocusLost => {
            passcode.suspend_focus();
            true
        }
        InputEvent::FocusGained => passcode.resume_focus(),
        InputEvent::None => false,
    }
}

// =============================================================================
// TERMINAL MODES
// =============================================================================

/// Enable bracketed paste and focus change reporting.
pub fn enable_paste() -> std::io::Result<()> {
    execute!(stdout(), EnableBracketedPaste, EnableFocusChange)
}

/// Disable bracketed paste and focus change reporting.
pub fn disable_paste() -> std::io::Result<()> {
    execute!(stdout(), DisableFocusChange, DisableBracketedPaste)
}

// =============================================================================
// TESTS
// =============================================================================
