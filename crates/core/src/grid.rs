//! Grid module - the letter matrix and its placed words
//!
//! The grid is a square of `size x size` cells stored row-major in a flat
//! `Vec`. Letters are fixed once the generator hands the grid over; only the
//! found flag and owning word id of a cell change during play.

use crate::types::{Direction, Position, WordColor};

/// One letter cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    letter: char,
    is_found: bool,
    word_id: Option<u32>,
}

impl Cell {
    pub(crate) fn new(position: Position, letter: char) -> Self {
        Self {
            position,
            letter,
            is_found: false,
            word_id: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> i8 {
        self.position.row
    }

    pub fn col(&self) -> i8 {
        self.position.col
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_found(&self) -> bool {
        self.is_found
    }

    /// Id of the word that most recently claimed this cell
    pub fn word_id(&self) -> Option<u32> {
        self.word_id
    }
}

/// A word on the grid, placed by the generator or synthesized for a bonus find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: u32,
    pub text: String,
    pub is_found: bool,
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
    pub color: WordColor,
    pub is_bonus: bool,
}

impl Word {
    /// Number of letters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cells from start to end, in reading order
    pub fn path(&self) -> Vec<Position> {
        (0..self.len())
            .map(|i| self.start.step(self.direction, i as i8))
            .collect()
    }

    /// Check whether `selection` covers exactly this word's cells, read
    /// either start→end or end→start.
    pub fn matches_selection(&self, selection: &[Position]) -> bool {
        let len = self.len();
        if len == 0 || selection.len() != len {
            return false;
        }
        let forward = selection
            .iter()
            .enumerate()
            .all(|(i, &p)| p == self.start.step(self.direction, i as i8));
        if forward {
            return true;
        }
        selection
            .iter()
            .enumerate()
            .all(|(i, &p)| p == self.end.step(self.direction.reverse(), i as i8))
    }
}

/// The full puzzle for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<Cell>,
    words: Vec<Word>,
    bonus_words: Vec<String>,
}

impl Grid {
    /// Build a grid from row-major letters.
    ///
    /// `letters.len()` must equal `size * size`.
    pub(crate) fn from_letters(
        size: u8,
        letters: Vec<char>,
        words: Vec<Word>,
        bonus_words: Vec<String>,
    ) -> Self {
        debug_assert_eq!(letters.len(), size as usize * size as usize);
        let cells = letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| {
                let row = (i / size as usize) as i8;
                let col = (i % size as usize) as i8;
                Cell::new(Position::new(row, col), letter)
            })
            .collect();
        Self {
            size,
            cells,
            words,
            bonus_words,
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        Some(pos.row as usize * self.size as usize + pos.col as usize)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// A zero-size grid or one without any placed word cannot be played
    pub fn is_playable(&self) -> bool {
        self.size > 0 && !self.words.is_empty()
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn letter(&self, pos: Position) -> Option<char> {
        self.cell(pos).map(Cell::letter)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    /// Regular words placed by the generator
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word(&self, id: u32) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    pub(crate) fn word_mut(&mut self, id: u32) -> Option<&mut Word> {
        self.words.iter_mut().find(|w| w.id == id)
    }

    /// Uppercase bonus dictionary supplied at generation time
    pub fn bonus_words(&self) -> &[String] {
        &self.bonus_words
    }

    /// Letters under `path`, in path order. `None` if any cell is off-grid.
    pub fn letters_along(&self, path: &[Position]) -> Option<String> {
        path.iter().map(|&p| self.letter(p)).collect()
    }

    /// Flag every cell of `path` as found and claimed by `word_id`
    pub(crate) fn mark_found(&mut self, path: &[Position], word_id: u32) {
        for &pos in path {
            if let Some(i) = self.index(pos) {
                self.cells[i].is_found = true;
                self.cells[i].word_id = Some(word_id);
            }
        }
    }

    /// Render the letters as text, one row per line (handy for logs and tests)
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for row in self.rows() {
            for cell in row {
                out.push(cell.letter);
            }
            out.push('\n');
        }
        out
    }
}

/// Check that `cells` form one straight, gap-free line.
pub fn is_straight_line(cells: &[Position]) -> bool {
    match cells {
        [] => false,
        [_] => true,
        _ => line_direction(cells).is_some(),
    }
}

/// Reading direction of a straight, gap-free line of at least two cells.
pub fn line_direction(cells: &[Position]) -> Option<Direction> {
    let [first, .., last] = cells else {
        return None;
    };
    let direction = Direction::from_delta(
        last.row as i16 - first.row as i16,
        last.col as i16 - first.col as i16,
    )?;
    (first.line_to(*last).as_deref() == Some(cells)).then_some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_word() -> Word {
        Word {
            id: 1,
            text: "CAT".to_string(),
            is_found: false,
            start: Position::new(0, 0),
            end: Position::new(0, 2),
            direction: Direction::East,
            color: WordColor::Rose,
            is_bonus: false,
        }
    }

    fn sample_grid() -> Grid {
        let letters = "CATXYZQRS".chars().collect();
        Grid::from_letters(3, letters, vec![sample_word()], vec!["ZYX".to_string()])
    }

    #[test]
    fn test_word_path() {
        let word = sample_word();
        assert_eq!(
            word.path(),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_matches_selection_both_ways() {
        let word = sample_word();
        let mut path = word.path();
        assert!(word.matches_selection(&path));
        path.reverse();
        assert!(word.matches_selection(&path));
        assert!(!word.matches_selection(&path[..2]));
        assert!(!word.matches_selection(&[]));
    }

    #[test]
    fn test_grid_lookup() {
        let grid = sample_grid();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.letter(Position::new(1, 2)), Some('Z'));
        assert!(grid.cell(Position::new(3, 0)).is_none());
        assert!(grid.cell(Position::new(-1, 0)).is_none());
        assert_eq!(grid.rows().count(), 3);
        assert_eq!(grid.to_text(), "CAT\nXYZ\nQRS\n");
    }

    #[test]
    fn test_letters_along() {
        let grid = sample_grid();
        let path = [Position::new(1, 2), Position::new(1, 1), Position::new(1, 0)];
        assert_eq!(grid.letters_along(&path).as_deref(), Some("ZYX"));
        assert_eq!(grid.letters_along(&[Position::new(5, 5)]), None);
    }

    #[test]
    fn test_mark_found_keeps_letters() {
        let mut grid = sample_grid();
        let path = sample_word().path();
        grid.mark_found(&path, 1);
        for pos in path {
            let cell = grid.cell(pos).unwrap();
            assert!(cell.is_found());
            assert_eq!(cell.word_id(), Some(1));
        }
        assert_eq!(grid.to_text(), "CAT\nXYZ\nQRS\n");
        assert!(!grid.cell(Position::new(2, 2)).unwrap().is_found());
    }

    #[test]
    fn test_is_straight_line() {
        assert!(!is_straight_line(&[]));
        assert!(is_straight_line(&[Position::new(1, 1)]));
        assert!(is_straight_line(&[
            Position::new(0, 2),
            Position::new(1, 1),
            Position::new(2, 0)
        ]));
        // Gap.
        assert!(!is_straight_line(&[
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(0, 3)
        ]));
        // Bend.
        assert!(!is_straight_line(&[
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1)
        ]));
    }

    #[test]
    fn test_line_direction() {
        let up_left = [Position::new(2, 2), Position::new(1, 1), Position::new(0, 0)];
        assert_eq!(line_direction(&up_left), Some(Direction::NorthWest));
        let down = [Position::new(0, 3), Position::new(1, 3)];
        assert_eq!(line_direction(&down), Some(Direction::South));
        assert_eq!(line_direction(&[Position::new(1, 1)]), None);
        let knight = [Position::new(0, 0), Position::new(1, 2)];
        assert_eq!(line_direction(&knight), None);
    }

    #[test]
    fn test_playable() {
        assert!(sample_grid().is_playable());
        let empty = Grid::from_letters(0, Vec::new(), Vec::new(), Vec::new());
        assert!(!empty.is_playable());
        assert_eq!(empty.rows().count(), 0);
    }
}
