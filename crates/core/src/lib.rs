//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the puzzle generator and the session controller. It
//! has **no dependencies** on terminal, input or I/O beyond loading an
//! optional word list file, which makes it:
//!
//! - **Deterministic**: the same seed produces the same grid and power-up picks
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any front end can drive a [`GameSession`]
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG used for placement, filler and power-ups
//! - [`grid`]: cells, placed words and the bonus dictionary
//! - [`generator`]: bounded-retry word placement and selection validation
//! - [`scoring`]: word points, combo bonus and end-of-game rewards
//! - [`session`]: the session controller, observers and results
//! - [`snapshot`]: read model for renderers
//! - [`themes`]: built-in word lists, bonus dictionary, custom lists
//!
//! # Example
//!
//! ```
//! use wordsearch_core::{GameSession, SelectionOutcome, SessionSetup, Theme};
//! use wordsearch_core::types::Difficulty;
//!
//! let setup = SessionSetup::new(Difficulty::Easy, Theme::Love, 7).with_words(&["LOVE", "HEART"]);
//! let mut session = GameSession::new(setup);
//!
//! // Select the first placed word back to front.
//! let mut path = session.grid().unwrap().words()[0].path();
//! path.reverse();
//! let outcome = session.handle_selection_complete(&path);
//! assert!(matches!(outcome, SelectionOutcome::Found { .. }));
//!
//! // One second passes.
//! session.tick();
//! assert_eq!(session.state().time_elapsed(), 1);
//! ```
//!
//! # Timing
//!
//! The session knows nothing about wall-clock time. The embedding loop calls
//! [`GameSession::tick`] once per second while the game is active; elapsed
//! time is the number of ticks received.

pub mod error;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod themes;

pub use wordsearch_types as types;

// Re-export commonly used types for convenience
pub use error::WordSearchError;
pub use generator::{generate_grid, validate_selection, Canvas, NO_BONUS_WORDS};
pub use grid::{Cell, Grid, Word};
pub use rng::SimpleRng;
pub use scoring::{calculate_rewards, calculate_word_score, RewardInput, Rewards, ScoreResult};
pub use session::{
    GameResult, GameSession, GameState, Highlight, HighlightKind, SelectionOutcome, SessionEvent,
    SessionObserver, SessionPhase, SessionSetup,
};
pub use snapshot::{CellSnapshot, SessionSnapshot, WordSnapshot};
pub use themes::{load_word_list, parse_difficulty, parse_theme, Theme};
