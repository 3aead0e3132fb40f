//! Session controller flows seen from an embedding application.

use tui_wordsearch::core::{
    GameSession, SelectionOutcome, SessionEvent, SessionPhase, SessionSetup, Theme,
};
use tui_wordsearch::types::{Difficulty, DifficultyConfig, Direction, Position, ALL_DIRECTIONS};

fn easy_setup(words: &[&str], bonus: &[&str]) -> SessionSetup {
    SessionSetup::new(Difficulty::Easy, Theme::Love, 2024)
        .with_config(DifficultyConfig {
            directions: &ALL_DIRECTIONS,
            ..Difficulty::Easy.config()
        })
        .with_words(words)
        .with_bonus_words(bonus)
}

fn find_all(session: &mut GameSession<Vec<SessionEvent>>) {
    let paths: Vec<Vec<Position>> = session
        .grid()
        .unwrap()
        .words()
        .iter()
        .map(|w| w.path())
        .collect();
    for path in paths {
        assert!(session.handle_selection_complete(&path).is_hit());
    }
}

#[test]
fn all_regular_found_with_bonus_left_keeps_playing() {
    let mut session =
        GameSession::with_observer(easy_setup(&["LOVE", "HEART"], &["SUN", "SKY"]), Vec::new());
    find_all(&mut session);

    let events = session.observer();
    assert!(matches!(
        events.last(),
        Some(SessionEvent::AllRegularWordsFound { remaining_bonus }) if remaining_bonus.len() == 2
    ));
    assert!(!events.iter().any(|e| matches!(e, SessionEvent::GameComplete(_))));
    assert_eq!(session.phase(), SessionPhase::Active);
    assert!(session.state().regular_words_complete());

    // The player can still stop; the game counts as perfect.
    let result = session.end_game().unwrap();
    assert!(result.is_perfect);
    assert_eq!(result.bonus_words_found, 0);
}

#[test]
fn all_regular_found_without_bonus_completes_immediately() {
    let mut session = GameSession::with_observer(easy_setup(&["LOVE", "HEART"], &[]), Vec::new());
    find_all(&mut session);

    let complete: Vec<_> = session
        .observer()
        .iter()
        .filter_map(|e| match e {
            SessionEvent::GameComplete(r) => Some(r.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(complete.len(), 1);
    assert!(complete[0].is_perfect);
    assert_eq!(complete[0].words_found, 2);
    assert!(!session
        .observer()
        .iter()
        .any(|e| matches!(e, SessionEvent::AllRegularWordsFound { .. })));
    assert_eq!(session.phase(), SessionPhase::GameOver);
}

#[test]
fn ending_on_regular_skips_bonus_hunt() {
    let setup = easy_setup(&["LOVE"], &["SUN"]).keep_hunting_bonus(false);
    let mut session = GameSession::with_observer(setup, Vec::new());
    find_all(&mut session);
    assert_eq!(session.phase(), SessionPhase::GameOver);
    assert!(session.result().unwrap().is_perfect);
}

#[test]
fn perfect_easy_game_with_fifteen_seconds_left_pays_37_coins() {
    let setup = easy_setup(&["LOVE", "HEART", "KISS"], &[]).with_config(DifficultyConfig {
        time_limit_secs: 60,
        directions: &ALL_DIRECTIONS,
        ..Difficulty::Easy.config()
    });
    let mut session = GameSession::with_observer(setup, Vec::new());
    for _ in 0..45 {
        assert!(session.tick());
    }
    find_all(&mut session);

    let result = session.result().unwrap();
    assert!(result.is_perfect);
    assert_eq!(result.time_elapsed, 45);
    assert_eq!(result.coins, 10 + 15 / 2 + 20);
    assert_eq!(result.coins, 37);
    assert_eq!(result.xp, 20 + 15 + 50 + 3 * 5);
}

#[test]
fn time_freeze_holds_the_clock_for_ten_ticks() {
    let mut session = GameSession::new(easy_setup(&["LOVE"], &[]));
    session.tick();
    assert!(session.time_freeze());
    for _ in 0..10 {
        assert!(!session.tick());
    }
    assert_eq!(session.state().time_elapsed(), 1);
    assert_eq!(session.freeze_ticks(), 20);

    for _ in 0..25 {
        session.tick();
    }
    assert_eq!(session.freeze_ticks(), 0);
    assert_eq!(session.state().time_elapsed(), 6);
}

#[test]
fn time_limit_ends_an_imperfect_game() {
    let mut session = GameSession::with_observer(easy_setup(&["LOVE", "HEART"], &[]), Vec::new());
    let path = session.grid().unwrap().words()[0].path();
    session.handle_selection_complete(&path);
    for _ in 0..180 {
        session.tick();
    }
    let result = session.result().unwrap();
    assert!(!result.is_perfect);
    assert_eq!(result.time_elapsed, 180);
    assert_eq!(result.coins, 10);
    assert_eq!(result.xp, 20 + 5);

    // Ticks after the end change nothing.
    assert!(!session.tick());
    assert_eq!(session.state().time_elapsed(), 180);
}

#[test]
fn restart_after_completion_starts_fresh() {
    let mut session = GameSession::with_observer(easy_setup(&["LOVE", "HEART"], &[]), Vec::new());
    session.tick();
    find_all(&mut session);
    assert_eq!(session.phase(), SessionPhase::GameOver);
    let episode = session.episode_id();

    session.restart();
    assert_eq!(session.phase(), SessionPhase::Active);
    assert_eq!(session.state().score(), 0);
    assert_eq!(session.state().time_elapsed(), 0);
    assert!(session.state().found_words().is_empty());
    assert!(session.result().is_none());
    let grid = session.grid().unwrap();
    assert!(grid.words().iter().all(|w| !w.is_found));
    assert!(grid.cells().iter().all(|c| !c.is_found()));
    assert_eq!(session.episode_id(), episode + 1);
}

#[test]
fn paused_session_accepts_nothing_until_resumed() {
    let mut session = GameSession::new(easy_setup(&["LOVE"], &[]));
    let path = session.grid().unwrap().words()[0].path();
    assert!(session.pause());
    assert_eq!(session.handle_selection_complete(&path), SelectionOutcome::Miss);
    assert!(!session.tick());
    assert!(session.reveal_letter().is_none());

    assert!(session.resume());
    assert!(session.handle_selection_complete(&path).is_hit());
}

#[test]
fn theme_words_fill_a_session_without_explicit_words() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert] {
        let session = GameSession::new(SessionSetup::new(difficulty, Theme::Travel, 77));
        let grid = session.grid().unwrap();
        let config = difficulty.config();
        assert_eq!(grid.size(), config.grid_size);
        assert!(!grid.words().is_empty());
        assert!(grid.words().len() <= config.word_count);
    }
}

#[test]
fn reversed_word_pairs_are_each_findable() {
    const LINES: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];
    for seed in 0..50 {
        let setup = SessionSetup::new(Difficulty::Easy, Theme::Love, seed)
            .with_config(DifficultyConfig {
                grid_size: 5,
                directions: &LINES,
                ..Difficulty::Easy.config()
            })
            .with_words(&["LIVE", "EVIL", "STAR", "RATS"]);
        let mut session = GameSession::with_observer(setup, Vec::new());
        find_all(&mut session);
        assert_eq!(session.phase(), SessionPhase::GameOver, "seed {seed}");
        assert!(session.result().unwrap().is_perfect, "seed {seed}");
    }
}
