//! # spark-passcode
//!
//! Reactive segmented passcode input for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A passcode is N single-character fields forming one code. All state lives
//! in one [`Coordinator`]: the slot vector and the focus cursor, both held in
//! signals. Each field gets a [`FieldInterpreter`] that turns native input
//! events into coordinator calls:
//!
//! ```text
//! key/change/paste/focus/blur → FieldInterpreter → Coordinator → on_update
//!                                                        ↓
//!                                            focus cursor → host moves focus
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Character class, alphabet flags, focus cursor
//! - [`state`] - Coordinator, field interpreter, keyboard types, terminal input
//! - [`primitives`] - `passcode()` mount and the native-input host
//! - [`error`] - Wiring errors

pub mod error;
pub mod primitives;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{PasscodeError, Result};

pub use state::{
    // Coordinator
    Coordinator, CoordinatorProps, UpdateCallback,
    // Field
    FieldAttributes, FieldInterpreter, FieldProps,
    // Keyboard
    EventOutcome, KeyState, KeyboardEvent, Modifiers,
};

pub use state::charset::{classify, filter, has_valid_characters};

pub use primitives::{passcode, FieldSpec, Fields, Passcode, PasscodeField, PasscodeProps};
