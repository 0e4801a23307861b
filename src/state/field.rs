//! Field Module - Per-field event interpretation
//!
//! A `FieldInterpreter` turns the raw events of one native input (key down,
//! change, focus, blur, paste) into coordinator calls. It applies the
//! character class and the auto-tab rules:
//!
//! - typing a character advances the cursor to the next field
//! - Backspace/Delete on a filled field clears it
//! - Backspace/Delete on an empty field retreats the cursor
//! - paste replaces the whole code, filtered by the class
//!
//! Every handler that can cancel a native default returns an
//! [`EventOutcome`]; the host must honour `Suppress`.

use std::collections::BTreeMap;

use tracing::trace;

use super::charset;
use super::coordinator::Coordinator;
use super::keyboard::{EventOutcome, KeyState, KeyboardEvent};
use crate::error::{PasscodeError, Result};

// =============================================================================
// Props
// =============================================================================

/// Wiring for one field.
#[derive(Clone, Debug, Default)]
pub struct FieldProps {
    /// Position of this field in the passcode.
    pub index: usize,
    /// The coordinator this field drives. Required.
    pub coordinator: Option<Coordinator>,
    /// Whether the field is required (default: true).
    pub required: Option<bool>,
    /// Move focus after typing and before deleting (default: true).
    pub auto_tab: Option<bool>,
    /// Declared input type (default: "text").
    pub input_type: Option<String>,
}

impl FieldProps {
    /// Props for field `index` wired to `coordinator`, everything else default.
    pub fn new(index: usize, coordinator: &Coordinator) -> Self {
        Self {
            index,
            coordinator: Some(coordinator.clone()),
            ..Default::default()
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// Attributes every field input must carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldAttributes {
    pub input_type: String,
    pub aria_label: String,
    pub value: String,
    pub required: bool,
    pub max_length: usize,
    pub auto_capitalize: &'static str,
    pub auto_correct: &'static str,
    pub auto_complete: &'static str,
    pub spell_check: bool,
    pub pattern: Option<&'static str>,
}

impl FieldAttributes {
    /// Render as HTML-style attribute names and values.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("type".to_string(), self.input_type.clone());
        map.insert("aria-label".to_string(), self.aria_label.clone());
        map.insert("value".to_string(), self.value.clone());
        map.insert("required".to_string(), self.required.to_string());
        map.insert("maxlength".to_string(), self.max_length.to_string());
        map.insert("autocapitalize".to_string(), self.auto_capitalize.to_string());
        map.insert("autocorrect".to_string(), self.auto_correct.to_string());
        map.insert("autocomplete".to_string(), self.auto_complete.to_string());
        map.insert("spellcheck".to_string(), self.spell_check.to_string());
        if let Some(pattern) = self.pattern {
            map.insert("pattern".to_string(), pattern.to_string());
        }
        map
    }
}

// =============================================================================
// Interpreter
// =============================================================================

/// Event logic for the field at one index.
#[derive(Clone, Debug)]
pub struct FieldInterpreter {
    index: usize,
    coordinator: Coordinator,
    required: Option<bool>,
    auto_tab: Option<bool>,
    input_type: Option<String>,
}

impl FieldInterpreter {
    /// Build an interpreter. Fails when no coordinator is supplied or the
    /// index is outside the coordinator's fields.
    pub fn new(props: FieldProps) -> Result<Self> {
        let coordinator = props
            .coordinator
            .ok_or(PasscodeError::MissingCoordinator { index: props.index })?;

        let total = coordinator.total_fields();
        if props.index >= total {
            return Err(PasscodeError::FieldIndexOutOfRange { index: props.index, total });
        }

        Ok(Self {
            index: props.index,
            coordinator,
            required: props.required,
            auto_tab: props.auto_tab,
            input_type: props.input_type,
        })
    }

    /// Position of this field, 0-based.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The shared state this field reads and writes.
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// This field's slot ("" when unset).
    pub fn value(&self) -> String {
        self.coordinator.slot_value(self.index)
    }

    /// Whether the cursor currently points at this field.
    pub fn has_focus(&self) -> bool {
        self.coordinator.is_focused(self.index)
    }

    /// Auto-advance on input and auto-retreat on deletion. Defaults to on.
    pub fn auto_tab_enabled(&self) -> bool {
        self.auto_tab.unwrap_or(true)
    }

    /// Defaults to true.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(true)
    }

    /// Native input type, "text" unless overridden.
    pub fn input_type(&self) -> &str {
        self.input_type.as_deref().unwrap_or("text")
    }

    // =========================================================================
    // Event handlers
    // =========================================================================

    /// Key-down phase, before any change event.
    pub fn on_key_down(&self, event: &KeyboardEvent) -> EventOutcome {
        if event.state == KeyState::Release || event.is_paste_shortcut() {
            return EventOutcome::Pass;
        }

        let deleting = event.is_deletion();
        let class = self.coordinator.character_class();
        let rejected = class.is_restricted()
            && !event.modifiers.is_platform()
            && !charset::has_valid_characters(&event.key, class);

        let outcome = if !event.is_tab() && (deleting || rejected) {
            EventOutcome::Suppress
        } else {
            EventOutcome::Pass
        };

        if !deleting {
            if outcome.is_suppressed() {
                trace!(index = self.index, "key rejected by character class");
            }
            return outcome;
        }

        match self.coordinator.slot(self.index) {
            None => {
                if self.auto_tab_enabled() {
                    let previous = self.index.saturating_sub(1);
                    trace!(index = self.index, previous, "auto-retreat from empty field");
                    self.coordinator.set_focus(Some(previous));
                }
            }
            Some(_) => self.coordinator.replace_slot(self.index, ""),
        }

        outcome
    }

    /// The native input value changed.
    pub fn on_change(&self, value: &str) {
        self.coordinator.replace_slot(self.index, value);

        if self.auto_tab_enabled() && !value.is_empty() {
            trace!(index = self.index, "auto-advance");
            self.coordinator.set_focus(Some(self.index + 1));
        }
    }

    /// The field received focus. Moves the cursor here.
    pub fn on_focus(&self) {
        self.coordinator.set_focus(Some(self.index));
    }

    /// The field lost focus. Clears the cursor.
    pub fn on_blur(&self) {
        self.coordinator.set_focus(None);
    }

    /// Paste capture. Always suppresses the native paste.
    ///
    /// Whitespace is stripped. Text that passes the anchored single-character
    /// check (or any text when unrestricted) is assigned as-is; anything else
    /// is filtered down to the class first. The whole code is replaced, from
    /// field 0, whichever field received the paste.
    pub fn on_paste_capture(&self, text: &str) -> EventOutcome {
        let class = self.coordinator.character_class();
        let stripped: String = text.chars().filter(|&c| !charset::is_paste_whitespace(c)).collect();

        if charset::has_valid_characters(&stripped, class) {
            self.coordinator.replace_value(&stripped);
        } else {
            trace!(index = self.index, "filtering pasted text");
            self.coordinator.replace_value(&charset::filter(&stripped, class));
        }

        EventOutcome::Suppress
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// The attribute set every field must carry, before host extras.
    pub fn attributes(&self) -> FieldAttributes {
        FieldAttributes {
            input_type: self.input_type().to_string(),
            aria_label: format!("Passcode field {}", self.index + 1),
            value: self.value(),
            required: self.is_required(),
            max_length: 1,
            auto_capitalize: "off",
            auto_correct: "off",
            auto_complete: "one-time-code",
            spell_check: false,
            pattern: self.coordinator.character_class().pattern(),
        }
    }

    /// Mandated attributes overlaid with host-supplied extras. Extras win.
    pub fn merged_attributes(&self, extra: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut map = self.attributes().to_map();
        map.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        map
    }
}

// =============================================================================
// TESTS
// =============================================================================
