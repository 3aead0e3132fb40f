//! Runtime configuration from `WORDSEARCH_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::core::{load_word_list, parse_difficulty, parse_theme, SessionSetup, Theme, WordSearchError};
use crate::types::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub seed: u32,
    pub words_file: Option<PathBuf>,
    pub results_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    /// End as soon as every regular word is found instead of hunting bonus words.
    pub end_on_regular: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, WordSearchError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WordSearchError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let difficulty = match get("WORDSEARCH_DIFFICULTY") {
            Some(s) => parse_difficulty(&s)?,
            None => Difficulty::Medium,
        };
        let theme = match get("WORDSEARCH_THEME") {
            Some(s) => parse_theme(&s)?,
            None => Theme::Love,
        };
        let seed = get("WORDSEARCH_SEED")
            .and_then(|s| {
                s.parse()
                    .map_err(|e| warn!("invalid WORDSEARCH_SEED {s:?}: {e}"))
                    .ok()
            })
            .unwrap_or_else(clock_seed);
        let end_on_regular = get("WORDSEARCH_END_ON_REGULAR")
            .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(Self {
            difficulty,
            theme,
            seed,
            words_file: get("WORDSEARCH_WORDS_FILE").map(PathBuf::from),
            results_path: get("WORDSEARCH_RESULTS_PATH").map(PathBuf::from),
            log_path: get("WORDSEARCH_LOG_PATH").map(PathBuf::from),
            end_on_regular,
        })
    }

    /// Session setup for this configuration, loading the custom word list
    /// when one is configured.
    pub fn session_setup(&self) -> Result<SessionSetup, WordSearchError> {
        let mut setup = SessionSetup::new(self.difficulty, self.theme, self.seed)
            .keep_hunting_bonus(!self.end_on_regular);
        if let Some(path) = &self.words_file {
            let words = load_word_list(path)?;
            setup = setup.with_words(&words);
        }
        Ok(setup)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
