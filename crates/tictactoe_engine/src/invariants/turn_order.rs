//! Turn order invariant: X, O, X, O, ... and the side to move follows.

use super::Invariant;
use crate::{GameSession, Symbol};

/// Invariant: history alternates starting with X, and while the session is
/// active the side to move is X after an even number of moves.
pub struct TurnOrderInvariant;

impl Invariant<GameSession> for TurnOrderInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if history.first().is_some_and(|first| first.symbol != Symbol::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].symbol == w[1].symbol) {
            return false;
        }

        if !session.is_active() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        };
        session.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Symbols alternate turns starting with X"
    }
}
