//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a session snapshot
//! into a framebuffer, and the renderer flushes framebuffer diffs to the
//! terminal. No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use wordsearch_core as core;
pub use wordsearch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
