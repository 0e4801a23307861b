//! Passcode Primitive - N single-character fields sharing one value.
//!
//! `passcode()` mounts one [`Coordinator`] and one [`FieldInterpreter`] per
//! field, and returns a [`Passcode`] that stands in for the native inputs:
//! it tracks which field really holds focus, applies un-suppressed key
//! presses the way a `maxlength=1` input would, and follows the coordinator's
//! focus cursor.
//!
//! # Example
//!
//! ```ignore
//! use spark_passcode::primitives::{passcode, Fields, PasscodeProps};
//! use spark_passcode::state::KeyboardEvent;
//!
//! let mut pc = passcode(PasscodeProps {
//!     fields: Fields::Count(4),
//!     auto_focus: Some(true),
//!     ..Default::default()
//! })?;
//!
//! pc.key_down(&KeyboardEvent::new("5"));
//! assert_eq!(pc.coordinator().code(), "5");
//! assert_eq!(pc.native_focus(), Some(1));
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use super::types::{FieldSpec, PasscodeProps};
use crate::error::Result;
use crate::state::{
    Coordinator, CoordinatorProps, EventOutcome, FieldInterpreter, FieldProps, KeyState,
    KeyboardEvent,
};

// =============================================================================
// Field
// =============================================================================

/// One mounted field: its interpreter plus what the renderer needs.
#[derive(Clone, Debug)]
pub struct PasscodeField {
    interpreter: FieldInterpreter,
    spec: FieldSpec,
    renderer: Option<String>,
    extra_attributes: BTreeMap<String, String>,
}

impl PasscodeField {
    pub fn interpreter(&self) -> &FieldInterpreter {
        &self.interpreter
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Custom renderer key, passed through untouched.
    pub fn renderer(&self) -> Option<&str> {
        self.renderer.as_deref()
    }

    pub fn value(&self) -> String {
        self.interpreter.value()
    }

    /// Final attribute set: mandated attributes, then name/id, then extras.
    pub fn attributes(&self) -> BTreeMap<String, String> {
        let mut overrides = BTreeMap::new();
        if let Some(name) = &self.spec.name {
            overrides.insert("name".to_string(), name.clone());
        }
        if let Some(id) = &self.spec.id {
            overrides.insert("id".to_string(), id.clone());
        }
        overrides.extend(self.extra_attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.interpreter.merged_attributes(&overrides)
    }
}

// =============================================================================
// Passcode
// =============================================================================

/// A mounted passcode.
#[derive(Debug)]
pub struct Passcode {
    coordinator: Coordinator,
    fields: Vec<PasscodeField>,
    native_focus: Option<usize>,
    suspended_focus: Option<usize>,
    clipboard: Option<String>,
}

/// Mount a passcode.
pub fn passcode(props: PasscodeProps) -> Result<Passcode> {
    let specs = props.fields.specs(props.name.as_deref(), props.id.as_deref());
    let auto_focus = props.auto_focus_enabled();
    let auto_tab = props.auto_tab_enabled();
    let required = props.is_required();

    let coordinator = Coordinator::new(CoordinatorProps {
        total_fields: specs.len(),
        character_class: props.character_class,
        default_value: props.default_value,
        auto_focus: Some(auto_focus),
        on_update: props.on_update,
    });

    let fields = specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| -> Result<PasscodeField> {
            let interpreter = FieldInterpreter::new(FieldProps {
                auto_tab: Some(auto_tab),
                required: Some(required),
                input_type: props.input_type.clone(),
                ..FieldProps::new(index, &coordinator)
            })?;
            Ok(PasscodeField {
                interpreter,
                spec,
                renderer: props.renderer.clone(),
                extra_attributes: props.extra_attributes.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut passcode = Passcode {
        coordinator,
        fields,
        native_focus: None,
        suspended_focus: None,
        clipboard: None,
    };
    passcode.sync_focus();
    Ok(passcode)
}

impl Passcode {
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// All mounted fields in order.
    pub fn fields(&self) -> &[PasscodeField] {
        &self.fields
    }

    /// Field at `index`, if mounted.
    pub fn field(&self, index: usize) -> Option<&PasscodeField> {
        self.fields.get(index)
    }

    /// Number of fields (N).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field that actually holds input focus.
    pub fn native_focus(&self) -> Option<usize> {
        self.native_focus
    }

    /// Text pasted on the next paste shortcut.
    pub fn set_clipboard(&mut self, text: impl Into<String>) {
        self.clipboard = Some(text.into());
    }

    // =========================================================================
    // Native focus
    // =========================================================================

    /// Give input focus to field `index`. Blur fires on the old field first.
    /// Returns false when there is no such field.
    pub fn focus_field(&mut self, index: usize) -> bool {
        if index >= self.fields.len() {
            return false;
        }
        if self.native_focus == Some(index) {
            return true;
        }

        self.blur();
        self.suspended_focus = None;
        debug!(index, "native focus moved");
        self.native_focus = Some(index);
        self.fields[index].interpreter.on_focus();
        true
    }

    /// Take input focus away from whichever field has it.
    pub fn blur(&mut self) {
        if let Some(old) = self.native_focus.take() {
            self.fields[old].interpreter.on_blur();
        }
    }

    /// The host window lost focus. Blurs the focused field and remembers it
    /// for [`Passcode::resume_focus`].
    pub fn suspend_focus(&mut self) {
        if let Some(index) = self.native_focus {
            self.suspended_focus = Some(index);
            self.blur();
        }
    }

    /// The host window regained focus. Re-focuses the field held before
    /// [`Passcode::suspend_focus`]. Returns true if focus moved.
    pub fn resume_focus(&mut self) -> bool {
        match self.suspended_focus.take() {
            Some(index) if self.native_focus.is_none() => self.focus_field(index),
            _ => false,
        }
    }

    /// Move input focus to the field the cursor names, if it is not there yet.
    /// Returns true if focus moved.
    pub fn sync_focus(&mut self) -> bool {
        match self.coordinator.focused_field() {
            Some(index) if self.native_focus != Some(index) => self.focus_field(index),
            _ => false,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Key press or repeat on the focused field.
    ///
    /// If the interpreter lets the key through, the native default runs:
    /// Tab moves focus, a paste shortcut pastes the clipboard, and a printable
    /// character fills the field if it is empty.
    pub fn key_down(&mut self, event: &KeyboardEvent) -> EventOutcome {
        let Some(index) = self.native_focus else {
            return EventOutcome::Pass;
        };

        let outcome = self.fields[index].interpreter.on_key_down(event);
        if outcome.is_suppressed() || event.state == KeyState::Release {
            self.sync_focus();
            return outcome;
        }

        if event.is_tab() {
            self.tab(event.modifiers.shift);
        } else if event.is_paste_shortcut() {
            if let Some(text) = self.clipboard.clone() {
                self.paste(&text);
            }
        } else if let Some(c) = event.as_char().filter(|_| !event.modifiers.is_platform()) {
            let field = &self.fields[index].interpreter;
            if field.value().is_empty() {
                field.on_change(&c.to_string());
            }
        }

        self.sync_focus();
        outcome
    }

    /// Paste into the focused field. None when no field has focus.
    pub fn paste(&mut self, text: &str) -> Option<EventOutcome> {
        let index = self.native_focus?;
        let outcome = self.fields[index].interpreter.on_paste_capture(text);
        self.sync_focus();
        Some(outcome)
    }

    /// Native tabbing: next field, or previous with shift. Leaving either end
    /// blurs the passcode.
    fn tab(&mut self, backwards: bool) {
        let Some(index) = self.native_focus else {
            return;
        };

        let target = if backwards {
            index.checked_sub(1)
        } else {
            Some(index + 1).filter(|&i| i < self.fields.len())
        };

        match target {
            Some(target) => {
                self.focus_field(target);
            }
            None => self.blur(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
