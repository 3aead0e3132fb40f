use tracing::debug;

use crate::core::{GameSession, SelectionOutcome, SessionObserver};
use crate::cursor::SelectionCursor;
use crate::types::GameAction;

/// What a single action did, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    CursorMoved,
    SelectionStarted,
    SelectionCancelled,
    Selection(SelectionOutcome),
    Applied,
    Rejected(ActionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    NotPlayable,
    AtEdge,
    NothingToReveal,
}

impl ActionError {
    pub fn code(self) -> &'static str {
        match self {
            ActionError::NotPlayable => "not_playable",
            ActionError::AtEdge => "at_edge",
            ActionError::NothingToReveal => "power_up_unavailable",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ActionError::NotPlayable => "game is not playable",
            ActionError::AtEdge => "cursor is at the edge of the grid",
            ActionError::NothingToReveal => "no unfound words left",
        }
    }
}

impl ActionOutcome {
    /// Short status text, `None` for silent outcomes.
    pub fn message(&self) -> Option<String> {
        match self {
            ActionOutcome::CursorMoved | ActionOutcome::SelectionStarted => None,
            ActionOutcome::SelectionCancelled => Some("selection cancelled".to_string()),
            ActionOutcome::Selection(SelectionOutcome::Found { points, combo, .. }) => {
                Some(if *combo {
                    format!("combo! +{points}")
                } else {
                    format!("found +{points}")
                })
            }
            ActionOutcome::Selection(SelectionOutcome::Bonus { points, .. }) => {
                Some(format!("bonus word +{points}"))
            }
            ActionOutcome::Selection(SelectionOutcome::AlreadyFound) => {
                Some("already found".to_string())
            }
            ActionOutcome::Selection(SelectionOutcome::Miss) => Some("not a word".to_string()),
            ActionOutcome::Applied => None,
            ActionOutcome::Rejected(err) => Some(err.message().to_string()),
        }
    }
}

/// Apply one input action to the session and the selection cursor.
///
/// Cursor movement and selection live here; everything else is forwarded
/// to [`GameSession::apply_action`].
pub fn apply_action<O: SessionObserver>(
    session: &mut GameSession<O>,
    cursor: &mut SelectionCursor,
    action: GameAction,
) -> ActionOutcome {
    if action == GameAction::Restart {
        session.apply_action(action);
        cursor.reset(session.grid().map(|g| g.size()).unwrap_or(0));
        return ActionOutcome::Applied;
    }

    // Pause toggles both ways and a paused game can still be ended;
    // everything else needs a running game.
    if !matches!(action, GameAction::Pause | GameAction::EndGame) && !session.is_active() {
        return ActionOutcome::Rejected(ActionError::NotPlayable);
    }

    let step = match action {
        GameAction::CursorUp => Some((-1, 0)),
        GameAction::CursorDown => Some((1, 0)),
        GameAction::CursorLeft => Some((0, -1)),
        GameAction::CursorRight => Some((0, 1)),
        _ => None,
    };
    if let Some((dr, dc)) = step {
        if !cursor.move_by(dr, dc) {
            return ActionOutcome::Rejected(ActionError::AtEdge);
        }
        if cursor.is_selecting() {
            session.update_selection(&cursor.selection());
        }
        return ActionOutcome::CursorMoved;
    }

    match action {
        GameAction::Select if !cursor.is_selecting() => {
            cursor.begin();
            session.update_selection(&cursor.selection());
            ActionOutcome::SelectionStarted
        }
        GameAction::Select => {
            let cells = cursor.selection();
            cursor.clear();
            let outcome = session.handle_selection_complete(&cells);
            debug!(cells = cells.len(), ?outcome, "selection complete");
            ActionOutcome::Selection(outcome)
        }
        GameAction::CancelSelection => {
            cursor.clear();
            session.update_selection(&[]);
            ActionOutcome::SelectionCancelled
        }
        GameAction::Pause | GameAction::TimeFreeze => {
            if session.apply_action(action) {
                ActionOutcome::Applied
            } else {
                ActionOutcome::Rejected(ActionError::NotPlayable)
            }
        }
        GameAction::EndGame => {
            cursor.clear();
            if session.apply_action(action) {
                ActionOutcome::Applied
            } else {
                ActionOutcome::Rejected(ActionError::NotPlayable)
            }
        }
        GameAction::RevealWord => {
            // A revealed word scores like a selection.
            cursor.clear();
            match session.reveal_word() {
                SelectionOutcome::Miss => ActionOutcome::Rejected(ActionError::NothingToReveal),
                outcome => ActionOutcome::Selection(outcome),
            }
        }
        _ => {
            if session.apply_action(action) {
                ActionOutcome::Applied
            } else {
                ActionOutcome::Rejected(ActionError::NothingToReveal)
            }
        }
    }
}
