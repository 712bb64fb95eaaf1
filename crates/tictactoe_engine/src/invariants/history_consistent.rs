//! History consistency invariant: replaying the moves rebuilds the board.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: every move landed on an empty cell and replaying the history
/// on an empty board yields the current board.
///
/// This also rules out overwritten cells: a mark never changes once placed.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();

        for mv in session.history() {
            if replayed.place(mv.index, mv.symbol).is_err() {
                return false;
            }
        }

        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}
