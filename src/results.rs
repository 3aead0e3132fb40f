//! Session observer that appends finished games to a JSON-lines file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::{GameResult, SessionObserver, Word};

#[derive(Debug, Default)]
pub struct ResultRecorder {
    path: Option<PathBuf>,
    pending: Vec<GameResult>,
    words_found: u32,
}

impl ResultRecorder {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    pub fn pending(&self) -> &[GameResult] {
        &self.pending
    }

    /// Words found across every episode so far.
    pub fn words_found(&self) -> u32 {
        self.words_found
    }

    /// Append pending results to the sink, if one is configured.
    pub fn flush(&mut self) -> Result<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }
        let Some(path) = &self.path else {
            return Ok(self.pending.drain(..).count());
        };
        let written = append_results(path, &self.pending)?;
        self.pending.clear();
        Ok(written)
    }
}

impl SessionObserver for ResultRecorder {
    fn on_word_found(&mut self, _word: &Word) {
        self.words_found += 1;
    }

    fn on_all_regular_words_found(&mut self, remaining_bonus: &[String]) {
        info!(bonus_left = remaining_bonus.len(), "all regular words found");
    }

    fn on_game_complete(&mut self, result: &GameResult) {
        self.pending.push(result.clone());
    }
}

/// Append one JSON object per line.
pub fn append_results(path: &Path, results: &[GameResult]) -> Result<usize> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening results file {}", path.display()))?;
    for result in results {
        let line = serde_json::to_string(result)?;
        writeln!(file, "{line}")?;
    }
    Ok(results.len())
}
