//! Session module - the game session controller
//!
//! A [`GameSession`] owns the authoritative [`GameState`] for one game. It is
//! driven by three kinds of discrete events, each handled to completion before
//! the next one:
//!
//! - a completed selection ([`GameSession::handle_selection_complete`])
//! - a once-per-second timer tick ([`GameSession::tick`])
//! - a power-up ([`GameSession::reveal_letter`], [`GameSession::reveal_word`],
//!   [`GameSession::time_freeze`], [`GameSession::highlight_first_letters`])
//!
//! Observers are notified synchronously from inside the call that caused the
//! event. Power-ups do not charge currency; that is left to the embedding
//! application.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::generator::generate_grid;
use crate::grid::{line_direction, Grid, Word};
use crate::rng::SimpleRng;
use crate::scoring::{
    bonus_word_reward, calculate_bonus_score, calculate_rewards, calculate_word_score, is_combo,
    RewardInput,
};
use crate::themes::{bonus_dictionary, theme_words, Theme};
use crate::types::{
    Difficulty, DifficultyConfig, GameAction, Position, WordColor,
    FIRST_LETTERS_TICKS, MIN_BONUS_WORD_LEN, REVEAL_LETTER_TICKS, TIME_FREEZE_TICKS,
};

/// Summary handed to the caller when a session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub score: u32,
    pub time_elapsed: u32,
    pub words_found: usize,
    pub total_words: usize,
    pub bonus_words_found: usize,
    pub coins: u32,
    pub xp: u32,
    pub is_perfect: bool,
    pub difficulty: Difficulty,
    pub theme: Theme,
}

/// What a completed selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A placed word was found.
    Found { word_id: u32, points: u32, combo: bool },
    /// The selection spelled a bonus dictionary word.
    Bonus { word_id: u32, points: u32 },
    /// The selection matched a word that was already found.
    AlreadyFound,
    /// Nothing matched, or the session is not accepting input.
    Miss,
}

impl SelectionOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, SelectionOutcome::Found { .. } | SelectionOutcome::Bonus { .. })
    }
}

/// Why a cell is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    RevealedLetter,
    FirstLetter,
}

/// A temporarily highlighted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub position: Position,
    pub kind: HighlightKind,
    pub ticks_left: u32,
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Paused,
    GameOver,
    /// The generated grid was unusable; every event is ignored.
    NoGrid,
}

/// Event emitted to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    WordFound(Word),
    AllRegularWordsFound { remaining_bonus: Vec<String> },
    GameComplete(GameResult),
}

/// Receives session callbacks. All methods default to doing nothing.
pub trait SessionObserver {
    fn on_word_found(&mut self, _word: &Word) {}

    /// Every regular word is found but bonus dictionary words remain.
    fn on_all_regular_words_found(&mut self, _remaining_bonus: &[String]) {}

    fn on_game_complete(&mut self, _result: &GameResult) {}
}

impl SessionObserver for () {}

/// Records every event in order.
impl SessionObserver for Vec<SessionEvent> {
    fn on_word_found(&mut self, word: &Word) {
        self.push(SessionEvent::WordFound(word.clone()));
    }

    fn on_all_regular_words_found(&mut self, remaining_bonus: &[String]) {
        self.push(SessionEvent::AllRegularWordsFound {
            remaining_bonus: remaining_bonus.to_vec(),
        });
    }

    fn on_game_complete(&mut self, result: &GameResult) {
        self.push(SessionEvent::GameComplete(result.clone()));
    }
}

/// Everything needed to (re)generate a session.
#[derive(Debug, Clone)]
pub struct SessionSetup {
    pub config: DifficultyConfig,
    pub theme: Theme,
    /// Fixed word list; `None` draws fresh theme words on every restart.
    pub words: Option<Vec<String>>,
    pub bonus_words: Vec<String>,
    /// Keep playing for bonus words once all regular words are found.
    pub keep_hunting_bonus: bool,
    pub seed: u32,
}

impl SessionSetup {
    pub fn new(difficulty: Difficulty, theme: Theme, seed: u32) -> Self {
        Self {
            config: difficulty.config(),
            theme,
            words: None,
            bonus_words: bonus_dictionary(),
            keep_hunting_bonus: true,
            seed,
        }
    }

    pub fn with_config(mut self, config: DifficultyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.words = Some(words.iter().map(|w| w.as_ref().to_string()).collect());
        self
    }

    pub fn with_bonus_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.bonus_words = words.iter().map(|w| w.as_ref().to_string()).collect();
        self
    }

    pub fn keep_hunting_bonus(mut self, keep: bool) -> Self {
        self.keep_hunting_bonus = keep;
        self
    }
}

/// Mutable play state of one session.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    grid: Option<Grid>,
    selected: Vec<Position>,
    found_words: Vec<Word>,
    score: u32,
    time_elapsed: u32,
    time_limit: u32,
    game_over: bool,
    paused: bool,
    freeze_ticks: u32,
    highlights: Vec<Highlight>,
    /// Session clock: every active tick, frozen or not.
    clock: u32,
    last_find_at: Option<u32>,
    regular_complete: bool,
    next_word_id: u32,
}

impl GameState {
    fn new(grid: Option<Grid>, time_limit: u32) -> Self {
        let next_word_id = grid
            .as_ref()
            .map(|g| g.words().iter().map(|w| w.id).max().unwrap_or(0) + 1)
            .unwrap_or(1);
        Self {
            grid,
            time_limit,
            next_word_id,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Cells of the selection currently being dragged
    pub fn selected_cells(&self) -> &[Position] {
        &self.selected
    }

    /// Regular and bonus words found so far, in find order
    pub fn found_words(&self) -> &[Word] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_limit.saturating_sub(self.time_elapsed)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn freeze_ticks(&self) -> u32 {
        self.freeze_ticks
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// True once every regular word is found
    pub fn regular_words_complete(&self) -> bool {
        self.regular_complete
    }

    pub fn bonus_words_found(&self) -> impl Iterator<Item = &Word> {
        self.found_words.iter().filter(|w| w.is_bonus)
    }
}

/// One game of word search.
#[derive(Debug)]
pub struct GameSession<O: SessionObserver = ()> {
    setup: SessionSetup,
    state: GameState,
    rng: SimpleRng,
    observer: O,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    result: Option<GameResult>,
}

impl GameSession<()> {
    /// Session without an observer
    pub fn new(setup: SessionSetup) -> Self {
        Self::with_observer(setup, ())
    }
}

impl<O: SessionObserver> GameSession<O> {
    pub fn with_observer(setup: SessionSetup, observer: O) -> Self {
        let mut rng = SimpleRng::new(setup.seed);
        let state = Self::fresh_state(&setup, &mut rng);
        Self {
            setup,
            state,
            rng,
            observer,
            episode_id: 0,
            result: None,
        }
    }

    fn fresh_state(setup: &SessionSetup, rng: &mut SimpleRng) -> GameState {
        let config = &setup.config;
        let words = match &setup.words {
            Some(words) => words.clone(),
            None => theme_words(
                setup.theme,
                config.word_count,
                config.grid_size as usize,
                rng,
            ),
        };
        let grid = generate_grid(&words, config, &setup.bonus_words, rng);
        let grid = if grid.is_playable() {
            info!(
                difficulty = config.difficulty.as_str(),
                theme = setup.theme.as_str(),
                words = grid.words().len(),
                "session ready"
            );
            Some(grid)
        } else {
            warn!(
                size = grid.size(),
                requested = words.len(),
                "generated grid is not playable; session will ignore events"
            );
            None
        };
        GameState::new(grid, config.time_limit_secs)
    }

    pub fn setup(&self) -> &SessionSetup {
        &self.setup
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.state.grid()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Result of the finished game, if any
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.state.grid.is_none() {
            SessionPhase::NoGrid
        } else if self.state.game_over {
            SessionPhase::GameOver
        } else if self.state.paused {
            SessionPhase::Paused
        } else {
            SessionPhase::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == SessionPhase::Active
    }

    /// Cells currently highlighted by power-ups
    pub fn highlighted_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.state.highlights.iter().map(|h| h.position)
    }

    pub fn freeze_ticks(&self) -> u32 {
        self.state.freeze_ticks
    }

    /// Unfound entries of the bonus dictionary
    pub fn remaining_bonus_words(&self) -> Vec<String> {
        let Some(grid) = self.state.grid.as_ref() else {
            return Vec::new();
        };
        grid.bonus_words()
            .iter()
            .filter(|b| !self.state.bonus_words_found().any(|w| &w.text == *b))
            .cloned()
            .collect()
    }

    /// Replace the in-progress drag selection (display only).
    pub fn update_selection(&mut self, cells: &[Position]) {
        if !self.is_active() {
            return;
        }
        self.state.selected.clear();
        self.state.selected.extend_from_slice(cells);
    }

    /// Process a finished drag.
    ///
    /// Placed words are matched first (either reading direction). Failing
    /// that, a straight selection of at least three cells whose letters
    /// spell an unfound bonus dictionary word is recorded as a bonus find.
    /// Anything else is a no-op.
    pub fn handle_selection_complete(&mut self, cells: &[Position]) -> SelectionOutcome {
        self.state.selected.clear();
        if !self.is_active() || cells.is_empty() {
            return SelectionOutcome::Miss;
        }
        let Some(grid) = self.state.grid.as_ref() else {
            return SelectionOutcome::Miss;
        };
        if !cells.iter().all(|p| p.in_bounds(grid.size())) {
            return SelectionOutcome::Miss;
        }

        if let Some(word) = crate::generator::validate_selection(cells, grid.words()) {
            if word.is_found {
                return SelectionOutcome::AlreadyFound;
            }
            let id = word.id;
            return self.record_regular_find(id);
        }

        self.try_bonus_find(cells)
    }

    fn record_regular_find(&mut self, word_id: u32) -> SelectionOutcome {
        let now = self.state.clock;
        let combo = is_combo(self.state.last_find_at, now);

        let Some(grid) = self.state.grid.as_mut() else {
            return SelectionOutcome::Miss;
        };
        let Some(word) = grid.word_mut(word_id) else {
            return SelectionOutcome::Miss;
        };
        word.is_found = true;
        let word = word.clone();
        let path = word.path();
        grid.mark_found(&path, word_id);

        let score = calculate_word_score(word.len(), combo);
        self.state.score = self.state.score.saturating_add(score.total);
        self.state.last_find_at = Some(now);
        self.state.highlights.retain(|h| !path.contains(&h.position));
        debug!(word = %word.text, points = score.total, combo, "word found");

        self.state.found_words.push(word.clone());
        self.observer.on_word_found(&word);
        self.check_completion();

        SelectionOutcome::Found {
            word_id,
            points: score.total,
            combo,
        }
    }

    fn try_bonus_find(&mut self, cells: &[Position]) -> SelectionOutcome {
        if cells.len() < MIN_BONUS_WORD_LEN {
            return SelectionOutcome::Miss;
        }
        let Some(direction) = line_direction(cells) else {
            return SelectionOutcome::Miss;
        };
        let Some(grid) = self.state.grid.as_ref() else {
            return SelectionOutcome::Miss;
        };
        let Some(text) = grid.letters_along(cells) else {
            return SelectionOutcome::Miss;
        };
        if !grid.bonus_words().contains(&text)
            || self.state.bonus_words_found().any(|w| w.text == text)
        {
            return SelectionOutcome::Miss;
        }

        let start = cells[0];
        let end = cells[cells.len() - 1];

        let word_id = self.state.next_word_id;
        self.state.next_word_id += 1;
        let word = Word {
            id: word_id,
            text,
            is_found: true,
            start,
            end,
            direction,
            color: WordColor::Gold,
            is_bonus: true,
        };

        if let Some(grid) = self.state.grid.as_mut() {
            grid.mark_found(cells, word_id);
        }
        let points = calculate_bonus_score(word.len());
        self.state.score = self.state.score.saturating_add(points);
        debug!(word = %word.text, points, "bonus word found");

        self.state.found_words.push(word.clone());
        self.observer.on_word_found(&word);

        if self.state.regular_complete && self.remaining_bonus_words().is_empty() {
            self.end_game();
        }

        SelectionOutcome::Bonus { word_id, points }
    }

    fn all_regular_found(&self) -> bool {
        self.state
            .grid
            .as_ref()
            .map(|g| g.words().iter().all(|w| w.is_found))
            .unwrap_or(false)
    }

    fn check_completion(&mut self) {
        if self.state.regular_complete || !self.all_regular_found() {
            return;
        }
        let remaining = self.remaining_bonus_words();
        if self.setup.keep_hunting_bonus && !remaining.is_empty() {
            self.state.regular_complete = true;
            info!(remaining = remaining.len(), "all regular words found, bonus words remain");
            self.observer.on_all_regular_words_found(&remaining);
        } else {
            self.state.regular_complete = true;
            self.end_game();
        }
    }

    /// Finish the game and compute rewards.
    ///
    /// Returns `None` when there is no grid or the game is already over.
    pub fn end_game(&mut self) -> Option<GameResult> {
        if self.state.game_over {
            return None;
        }
        let grid = self.state.grid.as_ref()?;

        let total_words = grid.words().len();
        let words_found = grid.words().iter().filter(|w| w.is_found).count();
        let is_perfect = words_found == total_words;
        let bonus_rewards: Vec<_> = self
            .state
            .bonus_words_found()
            .map(|w| bonus_word_reward(w.len()))
            .collect();
        let input = RewardInput {
            is_perfect,
            time_remaining: self.state.time_remaining(),
            regular_words_found: words_found,
        };
        let rewards = calculate_rewards(&self.setup.config, input, bonus_rewards.iter().copied());

        let result = GameResult {
            score: self.state.score,
            time_elapsed: self.state.time_elapsed,
            words_found,
            total_words,
            bonus_words_found: bonus_rewards.len(),
            coins: rewards.coins,
            xp: rewards.xp,
            is_perfect,
            difficulty: self.setup.config.difficulty,
            theme: self.setup.theme,
        };

        self.state.game_over = true;
        self.state.paused = false;
        self.state.selected.clear();
        self.state.highlights.clear();
        self.state.freeze_ticks = 0;
        info!(
            score = result.score,
            coins = result.coins,
            xp = result.xp,
            perfect = result.is_perfect,
            "game complete"
        );

        self.observer.on_game_complete(&result);
        self.result = Some(result.clone());
        Some(result)
    }

    /// Advance the session by one second.
    ///
    /// While a time freeze is active the freeze counter drops instead of the
    /// elapsed time. Reaching the time limit ends the game. Returns whether
    /// elapsed time advanced.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state.clock = self.state.clock.wrapping_add(1);

        for h in &mut self.state.highlights {
            h.ticks_left = h.ticks_left.saturating_sub(1);
        }
        self.state.highlights.retain(|h| h.ticks_left > 0);

        if self.state.freeze_ticks > 0 {
            self.state.freeze_ticks -= 1;
            return false;
        }

        self.state.time_elapsed += 1;
        if self.state.time_elapsed >= self.state.time_limit {
            self.end_game();
        }
        true
    }

    /// Pause an active game. Returns false if nothing changed.
    pub fn pause(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state.paused = true;
        self.state.selected.clear();
        true
    }

    /// Resume a paused game. Returns false if nothing changed.
    pub fn resume(&mut self) -> bool {
        if self.phase() != SessionPhase::Paused {
            return false;
        }
        self.state.paused = false;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase() {
            SessionPhase::Active => self.pause(),
            SessionPhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Start over with a freshly generated grid and zeroed counters.
    pub fn restart(&mut self) {
        let seed = self.rng.next_u32();
        self.rng = SimpleRng::new(seed);
        self.state = Self::fresh_state(&self.setup, &mut self.rng);
        self.result = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(episode = self.episode_id, seed, "session restarted");
    }

    fn unfound_regular_ids(&self) -> Vec<u32> {
        self.state
            .grid
            .as_ref()
            .map(|g| {
                g.words()
                    .iter()
                    .filter(|w| !w.is_found && !w.is_bonus)
                    .map(|w| w.id)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn random_unfound_word(&mut self) -> Option<Word> {
        let ids = self.unfound_regular_ids();
        let id = *self.rng.choose(&ids)?;
        self.state.grid.as_ref()?.word(id).cloned()
    }

    /// Highlight one random cell of a random unfound word.
    pub fn reveal_letter(&mut self) -> Option<Position> {
        if !self.is_active() {
            return None;
        }
        let word = self.random_unfound_word()?;
        let path = word.path();
        let position = *self.rng.choose(&path)?;
        self.state.highlights.push(Highlight {
            position,
            kind: HighlightKind::RevealedLetter,
            ticks_left: REVEAL_LETTER_TICKS,
        });
        debug!(word = %word.text, ?position, "revealed letter");
        Some(position)
    }

    /// Find a random unfound word as if the player had selected it.
    pub fn reveal_word(&mut self) -> SelectionOutcome {
        if !self.is_active() {
            return SelectionOutcome::Miss;
        }
        let Some(word) = self.random_unfound_word() else {
            return SelectionOutcome::Miss;
        };
        self.handle_selection_complete(&word.path())
    }

    /// Stop the clock for the next `TIME_FREEZE_TICKS` ticks.
    pub fn time_freeze(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state.freeze_ticks = TIME_FREEZE_TICKS;
        true
    }

    /// Highlight the first cell of every unfound word. Returns the count.
    pub fn highlight_first_letters(&mut self) -> usize {
        if !self.is_active() {
            return 0;
        }
        let starts: Vec<Position> = self
            .state
            .grid
            .as_ref()
            .map(|g| {
                g.words()
                    .iter()
                    .filter(|w| !w.is_found && !w.is_bonus)
                    .map(|w| w.start)
                    .collect()
            })
            .unwrap_or_default();
        for &position in &starts {
            self.state.highlights.push(Highlight {
                position,
                kind: HighlightKind::FirstLetter,
                ticks_left: FIRST_LETTERS_TICKS,
            });
        }
        starts.len()
    }

    /// Apply a session-level action. Cursor movement and selection belong
    /// to the input layer and are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::RevealLetter => self.reveal_letter().is_some(),
            GameAction::RevealWord => self.reveal_word().is_hit(),
            GameAction::TimeFreeze => self.time_freeze(),
            GameAction::HighlightFirstLetters => self.highlight_first_letters() > 0,
            GameAction::Pause => self.toggle_pause(),
            GameAction::EndGame => self.end_game().is_some(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::CursorUp
            | GameAction::CursorDown
            | GameAction::CursorLeft
            | GameAction::CursorRight
            | GameAction::Select
            | GameAction::CancelSelection => false,
        }
    }
}
