//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (generator, session controller, terminal rendering).
//!
//! # Grid Coordinates
//!
//! Positions are `(row, col)` pairs with `row` growing downwards and `col`
//! growing to the right. Coordinates are signed so that a selection which
//! wanders off the grid can still be represented (and rejected).
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_WORD_POINTS` | 100 | Points for any regular word |
//! | `LETTER_POINTS` | 10 | Points per letter |
//! | `COMBO_BONUS` | 50 | Extra points for a quick follow-up find |
//! | `COMBO_WINDOW_SECS` | 5 | Max seconds between finds for a combo |
//! | `BONUS_BASE_POINTS` | 50 | Points for a bonus dictionary word |
//!
//! # Reward Constants
//!
//! End-of-game rewards start from the difficulty's base coins/xp:
//!
//! - perfect game with time left: `+ remaining * 1/2` coins, `+ remaining` xp
//! - perfect game: `+20` coins, `+50` xp
//! - every regular word found: `+5` xp
//! - every bonus word found: its entry in [`bonus_reward`]
//!
//! # Examples
//!
//! ```
//! use wordsearch_types::{Difficulty, Direction, Position};
//!
//! let config = Difficulty::Easy.config();
//! assert_eq!(config.grid_size, 8);
//!
//! let start = Position::new(0, 0);
//! assert_eq!(start.step(Direction::SouthEast, 3), Position::new(3, 3));
//! assert_eq!(Direction::from_delta(-2, 2), Some(Direction::NorthEast));
//! ```

use serde::{Deserialize, Serialize};

/// Fixed frame interval for the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Length of one session timer tick in milliseconds
pub const SECOND_MS: u32 = 1000;

/// Largest grid a [`Position`] can address
pub const MAX_GRID_SIZE: u8 = i8::MAX as u8;

/// Base points awarded for every regular word
pub const BASE_WORD_POINTS: u32 = 100;

/// Points per letter of a found word
pub const LETTER_POINTS: u32 = 10;

/// Combo bonus for a find within [`COMBO_WINDOW_SECS`] of the previous one
pub const COMBO_BONUS: u32 = 50;

/// Window (in session seconds) that qualifies a find for the combo bonus
pub const COMBO_WINDOW_SECS: u32 = 5;

/// Base points for a bonus dictionary word
pub const BONUS_BASE_POINTS: u32 = 50;

/// Shortest selection that is checked against the bonus dictionary
pub const MIN_BONUS_WORD_LEN: usize = 3;

/// Placement attempts per word before the generator gives up on it
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 200;

/// Ticks a time freeze suspends the clock for
pub const TIME_FREEZE_TICKS: u32 = 30;

/// Ticks a revealed letter stays highlighted
pub const REVEAL_LETTER_TICKS: u32 = 3;

/// Ticks the first letters stay highlighted
pub const FIRST_LETTERS_TICKS: u32 = 5;

/// Coins per remaining second on a perfect game (numerator)
pub const TIME_BONUS_COIN_NUMERATOR: u32 = 1;

/// Coins per remaining second on a perfect game (denominator)
pub const TIME_BONUS_COIN_DENOMINATOR: u32 = 2;

/// Xp per remaining second on a perfect game
pub const TIME_BONUS_XP_PER_SEC: u32 = 1;

/// Flat coin bonus for finding every regular word
pub const PERFECT_COIN_BONUS: u32 = 20;

/// Flat xp bonus for finding every regular word
pub const PERFECT_XP_BONUS: u32 = 50;

/// Xp for every regular word found
pub const XP_PER_WORD: u32 = 5;

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Move `steps` cells in `direction`.
    pub fn step(self, direction: Direction, steps: i8) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.saturating_add(dr.saturating_mul(steps)),
            col: self.col.saturating_add(dc.saturating_mul(steps)),
        }
    }

    /// Check if the position lies inside a square grid of `size`
    pub fn in_bounds(self, size: u8) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as i16) < size as i16 && (self.col as i16) < size as i16
    }

    /// Straight line of cells from `self` to `end`, both inclusive.
    ///
    /// Returns `None` when the two points are not on a horizontal, vertical
    /// or 45° diagonal line.
    ///
    /// ```
    /// use wordsearch_types::Position;
    ///
    /// let line = Position::new(2, 2).line_to(Position::new(0, 0)).unwrap();
    /// assert_eq!(line, vec![Position::new(2, 2), Position::new(1, 1), Position::new(0, 0)]);
    /// assert!(Position::new(0, 0).line_to(Position::new(1, 2)).is_none());
    /// ```
    pub fn line_to(self, end: Position) -> Option<Vec<Position>> {
        if self == end {
            return Some(vec![self]);
        }
        let dr = end.row as i16 - self.row as i16;
        let dc = end.col as i16 - self.col as i16;
        let direction = Direction::from_delta(dr, dc)?;
        let len = dr.abs().max(dc.abs()) as i8;
        Some((0..=len).map(|i| self.step(direction, i)).collect())
    }
}

/// The eight placement/selection directions.
///
/// `East` reads left to right, `South` top to bottom; the remaining six are
/// their reversals and the diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    NorthWest,
    SouthWest,
    NorthEast,
}

/// All eight directions
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
    Direction::SouthEast,
    Direction::NorthWest,
    Direction::SouthWest,
    Direction::NorthEast,
];

impl Direction {
    /// Row/column step for one cell
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
        }
    }

    /// Infer the direction of a start→end delta.
    ///
    /// Only straight lines qualify; a zero delta has no direction.
    pub fn from_delta(dr: i16, dc: i16) -> Option<Self> {
        if dr == 0 && dc == 0 {
            return None;
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return None;
        }
        match (dr.signum(), dc.signum()) {
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            (1, 0) => Some(Direction::South),
            (-1, 0) => Some(Direction::North),
            (1, 1) => Some(Direction::SouthEast),
            (-1, -1) => Some(Direction::NorthWest),
            (1, -1) => Some(Direction::SouthWest),
            (-1, 1) => Some(Direction::NorthEast),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
            Direction::SouthEast => Direction::NorthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthEast => Direction::SouthWest,
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::East => "horizontal",
            Direction::West => "horizontal-reverse",
            Direction::South => "vertical",
            Direction::North => "vertical-reverse",
            Direction::SouthEast => "diagonal-down",
            Direction::NorthWest => "diagonal-down-reverse",
            Direction::SouthWest => "diagonal-up-reverse",
            Direction::NorthEast => "diagonal-up",
        }
    }
}

const EASY_DIRECTIONS: [Direction; 2] = [Direction::East, Direction::South];

const MEDIUM_DIRECTIONS: [Direction; 3] = [Direction::East, Direction::South, Direction::SouthEast];

const HARD_DIRECTIONS: [Direction; 6] = [
    Direction::East,
    Direction::South,
    Direction::SouthEast,
    Direction::NorthEast,
    Direction::West,
    Direction::North,
];

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// ```
    /// use wordsearch_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Static tuning table for this difficulty
    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                difficulty: self,
                grid_size: 8,
                time_limit_secs: 180,
                coin_reward: 10,
                xp_reward: 20,
                word_count: 6,
                directions: &EASY_DIRECTIONS,
            },
            Difficulty::Medium => DifficultyConfig {
                difficulty: self,
                grid_size: 10,
                time_limit_secs: 240,
                coin_reward: 20,
                xp_reward: 40,
                word_count: 8,
                directions: &MEDIUM_DIRECTIONS,
            },
            Difficulty::Hard => DifficultyConfig {
                difficulty: self,
                grid_size: 12,
                time_limit_secs: 300,
                coin_reward: 35,
                xp_reward: 70,
                word_count: 10,
                directions: &HARD_DIRECTIONS,
            },
            Difficulty::Expert => DifficultyConfig {
                difficulty: self,
                grid_size: 15,
                time_limit_secs: 360,
                coin_reward: 50,
                xp_reward: 100,
                word_count: 12,
                directions: &ALL_DIRECTIONS,
            },
        }
    }
}

/// Per-difficulty tuning. Read-only; look it up with [`Difficulty::config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub difficulty: Difficulty,
    /// Width and height of the square grid, at most [`MAX_GRID_SIZE`]
    pub grid_size: u8,
    pub time_limit_secs: u32,
    /// Base coins paid at the end of every game
    pub coin_reward: u32,
    /// Base xp paid at the end of every game
    pub xp_reward: u32,
    /// Number of theme words drawn for a session
    pub word_count: usize,
    /// Directions the generator may place words in
    pub directions: &'static [Direction],
}

/// Coins and xp earned for one bonus word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BonusReward {
    pub coins: u32,
    pub xp: u32,
}

/// Bonus word rewards by length: (min length, coins, xp), longest first.
pub const BONUS_REWARDS: [(usize, u32, u32); 5] = [
    (7, 40, 80),
    (6, 25, 50),
    (5, 15, 30),
    (4, 10, 20),
    (3, 5, 10),
];

/// Reward for a bonus word of `len` letters.
///
/// Words shorter than [`MIN_BONUS_WORD_LEN`] earn nothing; anything longer
/// than the top entry is paid at the top rate.
pub fn bonus_reward(len: usize) -> BonusReward {
    BONUS_REWARDS
        .iter()
        .find(|&&(min_len, _, _)| len >= min_len)
        .map(|&(_, coins, xp)| BonusReward { coins, xp })
        .unwrap_or_default()
}

/// Display colors for found words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordColor {
    Rose,
    Coral,
    Amber,
    Mint,
    Teal,
    Sky,
    Lavender,
    Orchid,
    /// Reserved for bonus words
    Gold,
}

/// Palette cycled through for regular words
pub const WORD_PALETTE: [WordColor; 8] = [
    WordColor::Rose,
    WordColor::Coral,
    WordColor::Amber,
    WordColor::Mint,
    WordColor::Teal,
    WordColor::Sky,
    WordColor::Lavender,
    WordColor::Orchid,
];

impl WordColor {
    /// Palette color for the `index`-th placed word
    pub fn for_index(index: usize) -> Self {
        WORD_PALETTE[index % WORD_PALETTE.len()]
    }
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Anchor a selection, or complete it when one is already anchored
    Select,
    CancelSelection,
    RevealLetter,
    RevealWord,
    TimeFreeze,
    HighlightFirstLetters,
    /// Toggle pause state
    Pause,
    Restart,
    /// Stop now and collect rewards
    EndGame,
}

impl GameAction {
    /// Parse action from string
    ///
    /// ```
    /// use wordsearch_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("revealWord"), Some(GameAction::RevealWord));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "select" => Some(GameAction::Select),
            "cancelselection" => Some(GameAction::CancelSelection),
            "revealletter" => Some(GameAction::RevealLetter),
            "revealword" => Some(GameAction::RevealWord),
            "timefreeze" => Some(GameAction::TimeFreeze),
            "highlightfirstletters" => Some(GameAction::HighlightFirstLetters),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            "endgame" => Some(GameAction::EndGame),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Select => "select",
            GameAction::CancelSelection => "cancelSelection",
            GameAction::RevealLetter => "revealLetter",
            GameAction::RevealWord => "revealWord",
            GameAction::TimeFreeze => "timeFreeze",
            GameAction::HighlightFirstLetters => "highlightFirstLetters",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::EndGame => "endGame",
        }
    }

    /// Whether this action consumes a power-up
    pub fn is_power_up(&self) -> bool {
        matches!(
            self,
            GameAction::RevealLetter
                | GameAction::RevealWord
                | GameAction::TimeFreeze
                | GameAction::HighlightFirstLetters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_defaults() {
        assert_eq!(BASE_WORD_POINTS, 100);
        assert_eq!(LETTER_POINTS, 10);
        assert_eq!(COMBO_BONUS, 50);
        assert_eq!(COMBO_WINDOW_SECS, 5);
        assert_eq!(TIME_FREEZE_TICKS, 30);
        assert_eq!(PERFECT_COIN_BONUS, 20);
    }

    #[test]
    fn end_game_action_names() {
        assert_eq!(GameAction::from_str("endGame"), Some(GameAction::EndGame));
        assert_eq!(GameAction::EndGame.as_str(), "endGame");
        assert!(!GameAction::EndGame.is_power_up());
    }

    #[test]
    fn largest_grid_is_addressable() {
        let last = MAX_GRID_SIZE as i8 - 1;
        assert!(Position::new(last, last).in_bounds(MAX_GRID_SIZE));
    }

    #[test]
    fn from_delta_rejects_crooked_lines() {
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 2), None);
        assert_eq!(Direction::from_delta(0, -4), Some(Direction::West));
        assert_eq!(Direction::from_delta(3, -3), Some(Direction::SouthWest));
    }

    #[test]
    fn delta_round_trips_through_from_delta() {
        for dir in ALL_DIRECTIONS {
            let (dr, dc) = dir.delta();
            assert_eq!(Direction::from_delta(dr as i16, dc as i16), Some(dir));
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }

    #[test]
    fn in_bounds_checks_both_axes() {
        assert!(Position::new(0, 0).in_bounds(8));
        assert!(Position::new(7, 7).in_bounds(8));
        assert!(!Position::new(8, 0).in_bounds(8));
        assert!(!Position::new(0, -1).in_bounds(8));
        assert!(!Position::new(0, 0).in_bounds(0));
    }

    #[test]
    fn bonus_reward_scales_with_length() {
        assert_eq!(bonus_reward(2), BonusReward::default());
        assert_eq!(bonus_reward(3), BonusReward { coins: 5, xp: 10 });
        assert_eq!(bonus_reward(5), BonusReward { coins: 15, xp: 30 });
        assert_eq!(bonus_reward(12), BonusReward { coins: 40, xp: 80 });
    }

    #[test]
    fn difficulty_table_grows_with_level() {
        let sizes: Vec<u8> = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert]
            .iter()
            .map(|d| d.config().grid_size)
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Difficulty::Easy.config().coin_reward, 10);
        assert_eq!(Difficulty::Expert.config().directions.len(), 8);
    }

    #[test]
    fn palette_wraps_and_skips_gold() {
        assert_eq!(WordColor::for_index(0), WordColor::Rose);
        assert_eq!(WordColor::for_index(8), WordColor::Rose);
        assert!((0..32).all(|i| WordColor::for_index(i) != WordColor::Gold));
    }
}
