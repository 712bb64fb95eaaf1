//! Balanced marks invariant: X moves first, so X leads O by zero or one.

use super::Invariant;
use crate::{GameSession, Symbol};
use tracing::warn;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameSession> for BalancedMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let x_count = session.board().count(Symbol::X);
        let o_count = session.board().count(Symbol::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}
