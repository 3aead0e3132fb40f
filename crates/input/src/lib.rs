//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Holding a
//! key relies on the terminal's own auto-repeat; release events are ignored.

pub mod map;

pub use wordsearch_types as types;

pub use map::{handle_key_event, power_up_slot, should_quit};
