//! Generator module - builds a playable grid from a word list
//!
//! Words are placed one at a time on a [`Canvas`]. Each word gets a bounded
//! number of random (start, direction) attempts; a placement is accepted when
//! every cell is either empty or already holds the same letter, so words may
//! cross on a shared letter but never contradict each other. Words that run
//! out of attempts are dropped and logged. Empty cells are finally filled
//! with random letters.

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::grid::{Grid, Word};
use crate::rng::SimpleRng;
use crate::types::{
    Direction, DifficultyConfig, Position, WordColor, MAX_GRID_SIZE, MAX_PLACEMENT_ATTEMPTS,
};

/// Empty bonus list for callers without a bonus dictionary.
pub const NO_BONUS_WORDS: [&str; 0] = [];

/// Uppercase a word and keep only ASCII letters.
///
/// ```
/// use wordsearch_core::generator::normalize_word;
///
/// assert_eq!(normalize_word(" ice-cream "), "ICECREAM");
/// assert_eq!(normalize_word("123"), "");
/// ```
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Partially filled letter board used while placing words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u8,
    letters: Vec<Option<char>>,
}

impl Canvas {
    pub fn new(size: u8) -> Self {
        Self {
            size,
            letters: vec![None; size as usize * size as usize],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        Some(pos.row as usize * self.size as usize + pos.col as usize)
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.index(pos).and_then(|i| self.letters[i])
    }

    /// Check if `word` fits starting at `start` going `direction`.
    ///
    /// Every cell must be inside the grid and either empty or already
    /// holding the letter the word needs there.
    pub fn can_place(&self, word: &str, start: Position, direction: Direction) -> bool {
        if word.is_empty() {
            return false;
        }
        word.chars().enumerate().all(|(i, ch)| {
            let pos = start.step(direction, i as i8);
            match self.index(pos) {
                Some(idx) => self.letters[idx].map_or(true, |existing| existing == ch),
                None => false,
            }
        })
    }

    /// Write `word` if it fits. Returns false (and leaves the canvas
    /// untouched) otherwise.
    pub fn place(&mut self, word: &str, start: Position, direction: Direction) -> bool {
        if !self.can_place(word, start, direction) {
            return false;
        }
        for (i, ch) in word.chars().enumerate() {
            if let Some(idx) = self.index(start.step(direction, i as i8)) {
                self.letters[idx] = Some(ch);
            }
        }
        true
    }

    /// Number of cells still waiting for a letter
    pub fn empty_cells(&self) -> usize {
        self.letters.iter().filter(|c| c.is_none()).count()
    }

    /// Fill the remaining cells with random letters
    pub fn fill(self, rng: &mut SimpleRng) -> Vec<char> {
        self.letters
            .into_iter()
            .map(|c| c.unwrap_or_else(|| rng.next_letter()))
            .collect()
    }
}

/// Valid start range along one axis for a word of `len` cells moving `step`.
fn start_range(size: u8, len: usize, step: i8) -> Option<(i8, i8)> {
    let size = size as i16;
    let len = len as i16;
    if len > size {
        return None;
    }
    let (lo, hi) = match step {
        1 => (0, size - len),
        -1 => (len - 1, size - 1),
        _ => (0, size - 1),
    };
    Some((lo as i8, hi as i8))
}

/// Random start position that keeps the whole word inside the grid.
fn random_start(
    rng: &mut SimpleRng,
    size: u8,
    len: usize,
    direction: Direction,
) -> Option<Position> {
    let (dr, dc) = direction.delta();
    let (row_lo, row_hi) = start_range(size, len, dr)?;
    let (col_lo, col_hi) = start_range(size, len, dc)?;
    let row = row_lo + rng.next_range((row_hi - row_lo + 1) as u32) as i8;
    let col = col_lo + rng.next_range((col_hi - col_lo + 1) as u32) as i8;
    Some(Position::new(row, col))
}

/// Directions the generator may use, never empty.
fn allowed_directions(config: &DifficultyConfig) -> ArrayVec<Direction, 8> {
    let mut dirs = ArrayVec::new();
    for &d in config.directions.iter() {
        if !dirs.contains(&d) && !dirs.is_full() {
            dirs.push(d);
        }
    }
    if dirs.is_empty() {
        dirs.push(Direction::East);
        dirs.push(Direction::South);
    }
    dirs
}

/// Try to place one word within the attempt budget.
///
/// A placement that lands on exactly the cells of an earlier word (for
/// example a reversed copy) is rejected: one selection cannot find both.
fn place_word(
    canvas: &mut Canvas,
    word: &str,
    directions: &[Direction],
    placed: &[Word],
    rng: &mut SimpleRng,
) -> Option<(Position, Direction)> {
    let len = word.chars().count();
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let Some(&direction) = rng.choose(directions) else {
            return None;
        };
        let Some(start) = random_start(rng, canvas.size(), len, direction) else {
            continue;
        };
        let path: Vec<Position> = (0..len).map(|i| start.step(direction, i as i8)).collect();
        if placed.iter().any(|w| w.matches_selection(&path)) {
            continue;
        }
        if canvas.place(word, start, direction) {
            return Some((start, direction));
        }
    }
    None
}

/// Generate a grid for `words` using the size and directions of `config`.
///
/// Words are normalized with [`normalize_word`]; empty and duplicate entries
/// are skipped. Words that do not fit are dropped rather than failing the
/// whole grid. `bonus_words` are not placed: they become the grid's bonus
/// dictionary and can only be found if the player happens to select them.
///
/// A `grid_size` above [`MAX_GRID_SIZE`] yields an empty, unplayable grid.
pub fn generate_grid<W, B>(
    words: W,
    config: &DifficultyConfig,
    bonus_words: B,
    rng: &mut SimpleRng,
) -> Grid
where
    W: IntoIterator,
    W::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let size = config.grid_size;
    if size > MAX_GRID_SIZE {
        warn!(grid_size = size, max = MAX_GRID_SIZE, "grid size not addressable");
        return Grid::from_letters(0, Vec::new(), Vec::new(), Vec::new());
    }
    let directions = allowed_directions(config);
    let mut canvas = Canvas::new(size);
    let mut placed: Vec<Word> = Vec::new();

    for raw in words {
        let text = normalize_word(raw.as_ref());
        if text.is_empty() {
            warn!(word = raw.as_ref(), "skipping word without letters");
            continue;
        }
        if placed.iter().any(|w| w.text == text) {
            warn!(word = %text, "skipping duplicate word");
            continue;
        }
        if text.len() > size as usize {
            warn!(word = %text, grid_size = size, "word longer than grid, dropped");
            continue;
        }

        match place_word(&mut canvas, &text, &directions, &placed, rng) {
            Some((start, direction)) => {
                let len = text.len() as i8;
                let end = start.step(direction, len - 1);
                debug!(word = %text, ?start, ?end, direction = direction.as_str(), "placed word");
                let index = placed.len();
                placed.push(Word {
                    id: index as u32 + 1,
                    text,
                    is_found: false,
                    start,
                    end,
                    direction,
                    color: WordColor::for_index(index),
                    is_bonus: false,
                });
            }
            None => {
                warn!(
                    word = %text,
                    attempts = MAX_PLACEMENT_ATTEMPTS,
                    "could not place word, dropped"
                );
            }
        }
    }

    let mut bonus: Vec<String> = Vec::new();
    for raw in bonus_words {
        let text = normalize_word(raw.as_ref());
        if !text.is_empty() && !bonus.contains(&text) {
            bonus.push(text);
        }
    }

    debug!(
        placed = placed.len(),
        filler = canvas.empty_cells(),
        "grid generated"
    );
    let letters = canvas.fill(rng);
    Grid::from_letters(size, letters, placed, bonus)
}

/// Find the placed word whose cells are exactly `selection`, in either
/// reading direction. An unfound word wins over a found one on the same cells.
pub fn validate_selection<'a>(selection: &[Position], words: &'a [Word]) -> Option<&'a Word> {
    if selection.is_empty() {
        return None;
    }
    let mut matches = words.iter().filter(|w| w.matches_selection(selection));
    let first = matches.next()?;
    if !first.is_found {
        return Some(first);
    }
    matches.find(|w| !w.is_found).or(Some(first))
}
