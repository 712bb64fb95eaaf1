//! Terminal status invariant: the session is finished exactly when the
//! board is terminal.

use super::Invariant;
use crate::rules::{check_draw, winner};
use crate::GameSession;

/// Invariant: an active session has no winner and an empty cell; a
/// finished session has a recorded result and a terminal board.
pub struct TerminalStatusInvariant;

impl Invariant<GameSession> for TerminalStatusInvariant {
    fn holds(session: &GameSession) -> bool {
        let terminal = winner(session.board()).is_some() || check_draw(session.board());

        if session.is_active() {
            !terminal && session.result().is_none()
        } else {
            terminal && session.result().is_some()
        }
    }

    fn description() -> &'static str {
        "Session is finished exactly when the board is won or full"
    }
}
