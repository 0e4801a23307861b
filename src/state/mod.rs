//! State Module - Passcode state and event logic
//!
//! - **Charset** - character-class policy (classify, filter)
//! - **Keyboard** - key event types and the suppression outcome
//! - **Coordinator** - value + focus cursor, observer notification
//! - **Field** - per-field event interpretation
//! - **Input** - crossterm event conversion and routing

pub mod charset;
mod coordinator;
mod field;
pub mod input;
mod keyboard;

pub use coordinator::*;
pub use field::*;
pub use keyboard::*;
