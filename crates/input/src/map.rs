//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Power-ups in the order of their number keys.
pub const POWER_UP_KEYS: [GameAction; 4] = [
    GameAction::RevealLetter,
    GameAction::RevealWord,
    GameAction::TimeFreeze,
    GameAction::HighlightFirstLetters,
];

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Select),
        KeyCode::Esc | KeyCode::Backspace => Some(GameAction::CancelSelection),

        // Power-ups
        KeyCode::Char(c @ '1'..='4') => power_up_slot(c as usize - '1' as usize),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::EndGame),

        _ => None,
    }
}

/// Power-up bound to number key `slot + 1`.
pub fn power_up_slot(slot: usize) -> Option<GameAction> {
    POWER_UP_KEYS.get(slot).copied()
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(GameAction::CursorDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::CursorLeft)
        );
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Select)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Select)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::CancelSelection)
        );
    }

    #[test]
    fn test_power_up_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::RevealLetter)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(GameAction::TimeFreeze)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('4'))),
            Some(GameAction::HighlightFirstLetters)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('5'))), None);
        assert!(POWER_UP_KEYS.iter().all(|a| a.is_power_up()));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('e'))),
            Some(GameAction::EndGame)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('E'))),
            Some(GameAction::EndGame)
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = KeyEvent::from(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(key), None);

        let mut quit = KeyEvent::from(KeyCode::Char('q'));
        quit.kind = KeyEventKind::Release;
        assert!(!should_quit(quit));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
