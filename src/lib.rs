//! Terminal word search (workspace facade crate).
//!
//! Re-exports `tui_wordsearch::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. The binary's
//! configuration, logging and result sink live here.

pub mod config;
pub mod logging;
pub mod results;

pub use wordsearch_core as core;
pub use wordsearch_engine as engine;
pub use wordsearch_input as input;
pub use wordsearch_term as term;
pub use wordsearch_types as types;

pub use config::AppConfig;
pub use results::ResultRecorder;
