//! Read-only view of a session for renderers.

use crate::session::{GameResult, GameSession, SessionObserver, SessionPhase};
use crate::themes::Theme;
use crate::types::{Difficulty, Position, WordColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSnapshot {
    pub letter: char,
    /// Color of the word that claimed the cell, once found
    pub found_color: Option<WordColor>,
    pub highlighted: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSnapshot {
    pub text: String,
    pub found: bool,
    pub is_bonus: bool,
    pub color: WordColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub size: u8,
    /// Row-major, `size * size` entries
    pub cells: Vec<CellSnapshot>,
    /// Regular words in placement order, then bonus finds
    pub words: Vec<WordSnapshot>,
    pub phase: SessionPhase,
    pub score: u32,
    pub time_elapsed: u32,
    pub time_limit: u32,
    pub freeze_ticks: u32,
    pub regular_complete: bool,
    pub bonus_remaining: usize,
    pub episode_id: u32,
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub result: Option<GameResult>,
}

impl SessionSnapshot {
    pub fn cell(&self, pos: Position) -> Option<&CellSnapshot> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.cells
            .get(pos.row as usize * self.size as usize + pos.col as usize)
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_limit.saturating_sub(self.time_elapsed)
    }

    pub fn words_found(&self) -> usize {
        self.words.iter().filter(|w| w.found && !w.is_bonus).count()
    }

    pub fn total_words(&self) -> usize {
        self.words.iter().filter(|w| !w.is_bonus).count()
    }

    pub fn playable(&self) -> bool {
        self.phase == SessionPhase::Active
    }
}

impl<O: SessionObserver> GameSession<O> {
    /// Capture everything a renderer needs.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state();
        let setup = self.setup();

        let mut cells = Vec::new();
        let mut words = Vec::new();
        let mut size = 0;

        if let Some(grid) = state.grid() {
            size = grid.size();
            let color_of = |id: u32| {
                grid.word(id)
                    .or_else(|| state.found_words().iter().find(|w| w.id == id))
                    .map(|w| w.color)
            };
            cells = grid
                .cells()
                .iter()
                .map(|c| CellSnapshot {
                    letter: c.letter(),
                    found_color: if c.is_found() {
                        c.word_id().and_then(color_of)
                    } else {
                        None
                    },
                    highlighted: state.highlights().iter().any(|h| h.position == c.position()),
                    selected: state.selected_cells().contains(&c.position()),
                })
                .collect();
            words = grid
                .words()
                .iter()
                .chain(state.bonus_words_found())
                .map(|w| WordSnapshot {
                    text: w.text.clone(),
                    found: w.is_found,
                    is_bonus: w.is_bonus,
                    color: w.color,
                })
                .collect();
        }

        SessionSnapshot {
            size,
            cells,
            words,
            phase: self.phase(),
            score: state.score(),
            time_elapsed: state.time_elapsed(),
            time_limit: state.time_limit(),
            freeze_ticks: state.freeze_ticks(),
            regular_complete: state.regular_words_complete(),
            bonus_remaining: self.remaining_bonus_words().len(),
            episode_id: self.episode_id(),
            difficulty: setup.config.difficulty,
            theme: setup.theme,
            result: self.result().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::session::{GameSession, SessionPhase, SessionSetup};
    use crate::themes::Theme;
    use crate::types::{Difficulty, Position};

    #[test]
    fn test_snapshot_tracks_found_cells() {
        let setup = SessionSetup::new(Difficulty::Easy, Theme::Food, 5)
            .with_words(&["PIZZA", "TACO"])
            .with_bonus_words(&["ZZZ"]);
        let mut session = GameSession::new(setup);

        let snap = session.snapshot();
        assert_eq!(snap.size, 8);
        assert_eq!(snap.cells.len(), 64);
        assert_eq!(snap.total_words(), 2);
        assert_eq!(snap.words_found(), 0);
        assert_eq!(snap.bonus_remaining, 1);
        assert!(snap.playable());

        let word = session.grid().unwrap().words()[0].clone();
        session.handle_selection_complete(&word.path());

        let snap = session.snapshot();
        assert_eq!(snap.words_found(), 1);
        for pos in word.path() {
            assert_eq!(snap.cell(pos).unwrap().found_color, Some(word.color));
        }
        assert!(snap.cell(Position::new(8, 0)).is_none());
    }

    #[test]
    fn test_snapshot_without_grid() {
        let setup = SessionSetup::new(Difficulty::Easy, Theme::Food, 5).with_words(&["CHOCOLATEBAR"]);
        let session = GameSession::new(setup);
        let snap = session.snapshot();
        assert_eq!(snap.phase, SessionPhase::NoGrid);
        assert!(snap.cells.is_empty());
        assert_eq!(snap.size, 0);
    }
}
