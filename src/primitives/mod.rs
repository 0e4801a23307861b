//! Passcode Primitives.
//!
//! - [`passcode`] - mounts a coordinator and one interpreter per field, and
//!   returns a [`Passcode`] that plays the native inputs.
//!
//! # Architecture
//!
//! The passcode is a coordinator plus N field interpreters:
//! 1. Props expand into one `FieldSpec` per field (name/id)
//! 2. The coordinator is seeded from the default value
//! 3. Each field gets an interpreter holding a coordinator handle
//! 4. Native focus follows the coordinator's cursor after every event
//!
//! ```ignore
//! let pc = passcode(PasscodeProps {
//!     fields: Fields::Count(6),
//!     character_class: CharacterClass::Digit,
//!     on_update: Some(Rc::new(|code, _| println!("{code}"))),
//!     ..Default::default()
//! })?;
//! ```

mod types;
mod passcode;

pub use types::*;
pub use passcode::{passcode, Passcode, PasscodeField};
