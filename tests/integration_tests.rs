//! Integration tests for the keyboard-driven game loop

use crossterm::event::{KeyCode, KeyEvent};

use tui_wordsearch::core::{GameSession, SelectionOutcome, SessionPhase, SessionSetup, Theme};
use tui_wordsearch::engine::{apply_action, ActionOutcome, SecondTicker, SelectionCursor};
use tui_wordsearch::input::handle_key_event;
use tui_wordsearch::types::{Difficulty, Position, TICK_MS};

fn press(
    session: &mut GameSession,
    cursor: &mut SelectionCursor,
    code: KeyCode,
) -> Option<ActionOutcome> {
    handle_key_event(KeyEvent::from(code)).map(|action| apply_action(session, cursor, action))
}

fn walk(session: &mut GameSession, cursor: &mut SelectionCursor, target: Position) {
    while cursor.position().row < target.row {
        press(session, cursor, KeyCode::Down);
    }
    while cursor.position().row > target.row {
        press(session, cursor, KeyCode::Up);
    }
    while cursor.position().col < target.col {
        press(session, cursor, KeyCode::Right);
    }
    while cursor.position().col > target.col {
        press(session, cursor, KeyCode::Left);
    }
}

fn new_game() -> (GameSession, SelectionCursor) {
    new_game_with_bonus(&[])
}

fn new_game_with_bonus(bonus: &[&str]) -> (GameSession, SelectionCursor) {
    let setup = SessionSetup::new(Difficulty::Hard, Theme::Animals, 31337).with_bonus_words(bonus);
    let session = GameSession::new(setup);
    let cursor = SelectionCursor::new(session.grid().unwrap().size());
    (session, cursor)
}

fn select_with_keys(
    session: &mut GameSession,
    cursor: &mut SelectionCursor,
    from: Position,
    to: Position,
) -> Option<ActionOutcome> {
    walk(session, cursor, from);
    assert_eq!(
        press(session, cursor, KeyCode::Char(' ')),
        Some(ActionOutcome::SelectionStarted)
    );
    // Straight lines are reachable one axis at a time thanks to snapping.
    walk(session, cursor, to);
    press(session, cursor, KeyCode::Enter)
}

#[test]
fn test_find_every_word_with_keys() {
    let (mut session, mut cursor) = new_game();
    let words = session.grid().unwrap().words().to_vec();

    for (i, word) in words.iter().enumerate() {
        // Select back to front on odd words.
        let (from, to) = if i % 2 == 0 {
            (word.start, word.end)
        } else {
            (word.end, word.start)
        };
        let outcome = select_with_keys(&mut session, &mut cursor, from, to);
        assert!(
            matches!(outcome, Some(ActionOutcome::Selection(SelectionOutcome::Found { .. }))),
            "{} -> {outcome:?}",
            word.text
        );
    }

    assert_eq!(session.phase(), SessionPhase::GameOver);
    let result = session.result().unwrap();
    assert!(result.is_perfect);
    assert_eq!(result.words_found, words.len());
}

#[test]
fn test_end_game_key_after_regular_words() {
    let (mut session, mut cursor) = new_game_with_bonus(&["ZEBRAFISH"]);
    let words = session.grid().unwrap().words().to_vec();
    for _ in 0..20 {
        session.tick();
    }

    for word in &words {
        let outcome = select_with_keys(&mut session, &mut cursor, word.start, word.end);
        assert!(
            matches!(outcome, Some(ActionOutcome::Selection(SelectionOutcome::Found { .. }))),
            "{} -> {outcome:?}",
            word.text
        );
    }
    // The bonus word is still out there, so the game keeps going.
    assert_eq!(session.phase(), SessionPhase::Active);
    assert!(session.result().is_none());

    assert_eq!(
        press(&mut session, &mut cursor, KeyCode::Char('e')),
        Some(ActionOutcome::Applied)
    );
    assert_eq!(session.phase(), SessionPhase::GameOver);
    let result = session.result().unwrap();
    assert!(result.is_perfect);
    assert_eq!(result.words_found, words.len());
    assert_eq!(result.bonus_words_found, 0);
    // 35 base, 20 perfect, 280 seconds left pays 140.
    assert_eq!(result.coins, 195);

    assert!(matches!(
        press(&mut session, &mut cursor, KeyCode::Char('e')),
        Some(ActionOutcome::Rejected(_))
    ));
}

#[test]
fn test_keys_while_paused() {
    let (mut session, mut cursor) = new_game();
    press(&mut session, &mut cursor, KeyCode::Char('p'));
    assert_eq!(session.phase(), SessionPhase::Paused);
    assert!(matches!(
        press(&mut session, &mut cursor, KeyCode::Char('2')),
        Some(ActionOutcome::Rejected(_))
    ));
    press(&mut session, &mut cursor, KeyCode::Char('p'));
    assert!(matches!(
        press(&mut session, &mut cursor, KeyCode::Char('2')),
        Some(ActionOutcome::Selection(SelectionOutcome::Found { .. }))
    ));
}

#[test]
fn test_frame_loop_drives_session_clock() {
    let (mut session, _) = new_game();
    let mut ticker = SecondTicker::new();

    // Ten seconds of frames.
    let frames = 10 * 1000 / TICK_MS + 1;
    for _ in 0..frames {
        for _ in 0..ticker.advance(TICK_MS) {
            session.tick();
        }
    }
    assert_eq!(session.state().time_elapsed(), 10);

    // Pausing cancels the ticker; the partial second is dropped.
    session.pause();
    ticker.cancel();
    for _ in 0..frames {
        for _ in 0..ticker.advance(TICK_MS) {
            session.tick();
        }
    }
    assert_eq!(session.state().time_elapsed(), 10);
}
