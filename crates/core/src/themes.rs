//! Themes module - built-in word lists and the bonus dictionary
//!
//! A session draws its regular words from one theme. The bonus dictionary is
//! shared by every theme: short everyday words a player may stumble upon in
//! the filler letters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WordSearchError;
use crate::generator::normalize_word;
use crate::rng::SimpleRng;
use crate::types::Difficulty;

/// Built-in word themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Love,
    Animals,
    Food,
    Nature,
    Travel,
}

pub const ALL_THEMES: [Theme; 5] = [
    Theme::Love,
    Theme::Animals,
    Theme::Food,
    Theme::Nature,
    Theme::Travel,
];

const LOVE_WORDS: &[&str] = &[
    "LOVE", "HEART", "KISS", "HUG", "DATE", "ROSES", "CANDLE", "DINNER", "DANCE", "CUDDLE",
    "SWEET", "CHARM", "DARLING", "HONEY", "FOREVER", "PROMISE", "WEDDING", "SUNSET", "ROMANCE",
    "TOGETHER",
];

const ANIMAL_WORDS: &[&str] = &[
    "PANDA", "TIGER", "KOALA", "OTTER", "LLAMA", "ZEBRA", "RABBIT", "DOLPHIN", "PENGUIN",
    "GIRAFFE", "KITTEN", "PUPPY", "PARROT", "TURTLE", "FOX", "OWL", "BEAR", "SWAN", "WHALE",
    "HEDGEHOG",
];

const FOOD_WORDS: &[&str] = &[
    "PIZZA", "PASTA", "SUSHI", "TACO", "WAFFLE", "CHEESE", "BREAD", "MANGO", "CHERRY", "COOKIE",
    "DONUT", "BAGEL", "LEMON", "PEACH", "CURRY", "NOODLE", "SALAD", "BURGER", "PANCAKE",
    "CHOCOLATE",
];

const NATURE_WORDS: &[&str] = &[
    "RIVER", "OCEAN", "FOREST", "MEADOW", "BREEZE", "CLOUD", "STORM", "DAISY", "TULIP", "MAPLE",
    "CANYON", "VALLEY", "MOSS", "FERN", "PEBBLE", "RAINBOW", "THUNDER", "SUNRISE", "GLACIER",
    "WATERFALL",
];

const TRAVEL_WORDS: &[&str] = &[
    "BEACH", "PLANE", "TRAIN", "HOTEL", "MAP", "TICKET", "CRUISE", "ISLAND", "CAMERA", "PASSPORT",
    "LUGGAGE", "SUITCASE", "JOURNEY", "VOYAGE", "HARBOR", "MUSEUM", "TOUR", "ROAD", "CABIN",
    "COMPASS",
];

/// Short common words recognized as bonus finds in any theme.
pub const BONUS_DICTIONARY: &[&str] = &[
    "ACE", "AIR", "ANT", "ARM", "ART", "BAT", "BED", "BEE", "BOX", "BUS", "CAR", "CAT", "COW",
    "CUP", "DOG", "EAR", "EAT", "EGG", "END", "EYE", "FAN", "FIG", "FUN", "GEM", "HAT", "HEN",
    "ICE", "INK", "JAM", "JOY", "KEY", "LEG", "MAP", "MUD", "NET", "NUT", "OAK", "OIL", "PEN",
    "PIE", "PIG", "RAT", "RED", "SEA", "SKY", "SUN", "TEA", "TEN", "TOE", "TOP", "WEB", "ZOO",
    "BAKE", "BELL", "BIRD", "BLUE", "BOAT", "CAKE", "COIN", "DEER", "DOOR", "DUCK", "FISH",
    "FROG", "GOLD", "HAND", "KITE", "LAKE", "LAMP", "LEAF", "LION", "MILK", "MOON", "NEST",
    "RAIN", "RING", "SAND", "SHIP", "SNOW", "SOCK", "STAR", "TREE", "WIND", "WOLF", "APPLE",
    "BEACH", "BRAVE", "CANDY", "DREAM", "EARTH", "FLAME", "GRAPE", "HAPPY", "LIGHT", "MUSIC",
    "PEARL", "SMILE", "STONE", "SUGAR", "WATER",
];

impl Theme {
    /// Parse theme from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "love" => Some(Theme::Love),
            "animals" => Some(Theme::Animals),
            "food" => Some(Theme::Food),
            "nature" => Some(Theme::Nature),
            "travel" => Some(Theme::Travel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Love => "love",
            Theme::Animals => "animals",
            Theme::Food => "food",
            Theme::Nature => "nature",
            Theme::Travel => "travel",
        }
    }

    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Theme::Love => LOVE_WORDS,
            Theme::Animals => ANIMAL_WORDS,
            Theme::Food => FOOD_WORDS,
            Theme::Nature => NATURE_WORDS,
            Theme::Travel => TRAVEL_WORDS,
        }
    }
}

/// Parse a difficulty name, with an error suitable for configuration.
pub fn parse_difficulty(s: &str) -> Result<Difficulty, WordSearchError> {
    Difficulty::from_str(s).ok_or_else(|| WordSearchError::UnknownDifficulty(s.to_string()))
}

/// Parse a theme name, with an error suitable for configuration.
pub fn parse_theme(s: &str) -> Result<Theme, WordSearchError> {
    Theme::from_str(s).ok_or_else(|| WordSearchError::UnknownTheme(s.to_string()))
}

/// Draw up to `count` random words from `theme` that fit in `max_len` letters.
pub fn theme_words(theme: Theme, count: usize, max_len: usize, rng: &mut SimpleRng) -> Vec<String> {
    let mut pool: Vec<&str> = theme
        .words()
        .iter()
        .copied()
        .filter(|w| w.len() <= max_len)
        .collect();
    rng.shuffle(&mut pool);
    pool.into_iter().take(count).map(str::to_string).collect()
}

/// The shared bonus dictionary as owned strings
pub fn bonus_dictionary() -> Vec<String> {
    BONUS_DICTIONARY.iter().map(|w| w.to_string()).collect()
}

/// Parse a word list: one word per line, `#` starts a comment, blank
/// lines are ignored. Words are normalized to uppercase letters.
pub fn parse_word_list(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or_default();
        let word = normalize_word(line);
        if !word.is_empty() && !out.contains(&word) {
            out.push(word);
        }
    }
    out
}

/// Load a custom word list from disk.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, WordSearchError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| WordSearchError::WordListIo {
        path: path.display().to_string(),
        source,
    })?;
    let words = parse_word_list(&text);
    if words.is_empty() {
        return Err(WordSearchError::EmptyWordList {
            path: path.display().to_string(),
        });
    }
    Ok(words)
}
