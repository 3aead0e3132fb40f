//! Engine layer: drives a [`GameSession`](wordsearch_core::GameSession) from
//! discrete input actions and a wall-clock timer.
//!
//! - [`cursor`]: keyboard anchor/extend selection
//! - [`play`]: action dispatch onto the session and cursor
//! - [`ticker`]: once-per-second cancellable timer

pub mod cursor;
pub mod play;
pub mod ticker;

pub use wordsearch_core as core;
pub use wordsearch_types as types;

pub use cursor::{snap_to_line, SelectionCursor};
pub use play::{apply_action, ActionError, ActionOutcome};
pub use ticker::SecondTicker;
