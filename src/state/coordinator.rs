//! Coordinator - Passcode value and focus state
//!
//! One coordinator per mounted passcode. It owns:
//! - the slot vector (one optional character per field)
//! - the focus cursor (field that should hold input focus)
//! - the optional `on_update` observer
//!
//! Both pieces of state live in signals, so a host can track them with
//! `spark_signals::effect` and move real focus when the cursor changes.
//!
//! Mutation happens only through `set_focus`, `replace_value` and
//! `replace_slot`. Each value mutation notifies the observer exactly once with
//! the post-mutation code.
//!
//! # Example
//!
//! ```ignore
//! use spark_passcode::state::{Coordinator, CoordinatorProps};
//!
//! let coordinator = Coordinator::new(CoordinatorProps {
//!     total_fields: 4,
//!     on_update: Some(Rc::new(|code, index| println!("{code} {index:?}"))),
//!     ..Default::default()
//! });
//!
//! coordinator.replace_slot(0, "5");
//! assert_eq!(coordinator.code(), "5");
//! ```

use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::{debug, warn};

use super::charset;
use crate::types::{CharacterClass, FocusCursor};

/// Observer fired after every value change.
///
/// The index is `Some` for a single-field edit and `None` for a bulk replace.
pub type UpdateCallback = Rc<dyn Fn(&str, Option<usize>)>;

/// Construction options for a [`Coordinator`].
#[derive(Default)]
pub struct CoordinatorProps {
    /// Number of fields (N).
    pub total_fields: usize,
    /// Character class used to filter the default value.
    pub character_class: CharacterClass,
    /// Initial code. Filtered by the class and cut to N characters.
    pub default_value: Option<String>,
    /// Put the cursor on field 0 when it starts empty (default: false).
    pub auto_focus: Option<bool>,
    /// Value-change observer.
    pub on_update: Option<UpdateCallback>,
}

struct CoordinatorState {
    total_fields: usize,
    character_class: CharacterClass,
    slots: Signal<Vec<Option<char>>>,
    focused: Signal<FocusCursor>,
    on_update: Option<UpdateCallback>,
}

/// Shared handle to one passcode's state. Cloning is cheap.
#[derive(Clone)]
pub struct Coordinator {
    state: Rc<CoordinatorState>,
}

impl Coordinator {
    /// Create the state for `total_fields` fields.
    ///
    /// The default value is filtered through the character class and
    /// truncated to N. With auto-focus on and field 0 empty, the cursor
    /// starts at field 0.
    pub fn new(props: CoordinatorProps) -> Self {
        let total_fields = props.total_fields;
        let seed = props
            .default_value
            .as_deref()
            .map(|value| charset::filter(value, props.character_class))
            .unwrap_or_default();

        let slots = split_into_slots(&seed, total_fields);
        let focused = if props.auto_focus.unwrap_or(false) && total_fields > 0 && slots[0].is_none() {
            Some(0)
        } else {
            None
        };

        debug!(total_fields, seeded = seed.chars().count().min(total_fields), "passcode mounted");

        Self {
            state: Rc::new(CoordinatorState {
                total_fields,
                character_class: props.character_class,
                slots: signal(slots),
                focused: signal(focused),
                on_update: props.on_update,
            }),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Number of fields (N).
    pub fn total_fields(&self) -> usize {
        self.state.total_fields
    }

    /// Class every field accepts.
    pub fn character_class(&self) -> CharacterClass {
        self.state.character_class
    }

    /// All slots in field order.
    pub fn slots(&self) -> Vec<Option<char>> {
        self.state.slots.get()
    }

    /// Character held by field `index`, if any.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots().get(index).copied().flatten()
    }

    /// Field `index` as the string a native input would show ("" when unset).
    pub fn slot_value(&self, index: usize) -> String {
        self.slot(index).map(String::from).unwrap_or_default()
    }

    /// The joined code. Unset slots contribute nothing.
    pub fn code(&self) -> String {
        join(&self.slots())
    }

    /// Current focus cursor. May be one past the last field.
    pub fn focus(&self) -> FocusCursor {
        self.state.focused.get()
    }

    /// The cursor, if it names an existing field.
    pub fn focused_field(&self) -> Option<usize> {
        self.focus().filter(|&index| index < self.state.total_fields)
    }

    /// True when the cursor names field `index`.
    pub fn is_focused(&self, index: usize) -> bool {
        self.focus() == Some(index)
    }

    /// Signal holding the slots, for hosts that track changes reactively.
    pub fn value_signal(&self) -> Signal<Vec<Option<char>>> {
        self.state.slots.clone()
    }

    /// Signal holding the focus cursor. Setting the same cursor again does
    /// not re-run effects.
    pub fn focus_signal(&self) -> Signal<FocusCursor> {
        self.state.focused.clone()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Set the focus cursor.
    ///
    /// Indices past the end are clamped to N (the "left the field set"
    /// position). The value is never touched.
    pub fn set_focus(&self, cursor: FocusCursor) {
        let cursor = cursor.map(|index| index.min(self.state.total_fields));
        debug!(cursor = ?cursor, "focus cursor set");
        self.state.focused.set(cursor);
    }

    /// Replace the whole value, then notify with no index.
    pub fn replace_value(&self, code: &str) {
        let slots = split_into_slots(code, self.state.total_fields);
        let truncated = join(&slots);

        debug!(filled = truncated.chars().count(), "passcode value replaced");
        self.state.slots.set(slots);
        self.notify(&truncated, None);
    }

    /// Replace one slot, then notify with its index.
    ///
    /// `value` is one character or "" to clear; extra characters are dropped.
    /// Writes outside 0..N are ignored and do not notify.
    pub fn replace_slot(&self, index: usize, value: &str) {
        if index >= self.state.total_fields {
            warn!(index, total_fields = self.state.total_fields, "ignored slot write out of range");
            return;
        }

        let mut slots = self.slots();
        slots[index] = value.chars().next();
        let code = join(&slots);

        debug!(index, cleared = slots[index].is_none(), "passcode slot replaced");
        self.state.slots.set(slots);
        self.notify(&code, Some(index));
    }

    fn notify(&self, code: &str, index: Option<usize>) {
        if let Some(on_update) = &self.state.on_update {
            on_update(code, index);
        }
    }
}

impl fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Slot contents stay out of debug output.
        f.debug_struct("Coordinator")
            .field("total_fields", &self.state.total_fields)
            .field("character_class", &self.state.character_class)
            .field("filled", &self.slots().iter().filter(|s| s.is_some()).count())
            .field("focus", &self.focus())
            .finish()
    }
}

fn split_into_slots(code: &str, total_fields: usize) -> Vec<Option<char>> {
    let mut slots: Vec<Option<char>> = code.chars().take(total_fields).map(Some).collect();
    slots.resize(total_fields, None);
    slots
}

fn join(slots: &[Option<char>]) -> String {
    slots.iter().flatten().collect()
}

// =============================================================================
// TESTS
// =============================================================================
