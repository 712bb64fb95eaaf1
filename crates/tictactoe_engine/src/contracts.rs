//! Contract-based validation for session moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} move {Q}`. Preconditions always run; postconditions run in debug
//! builds.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::is_legal_move;
use crate::{EngineError, GameSession, Move, Symbol, BOARD_SIZE};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session still accepts moves.
pub struct SessionActive;

impl SessionActive {
    /// Fails with `GameOver` once the session has finished.
    pub fn check(session: &GameSession) -> Result<(), EngineError> {
        if session.is_active() {
            Ok(())
        } else {
            Err(EngineError::GameOver)
        }
    }
}

/// Precondition: it is `symbol`'s turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `NotYourTurn` if the other side is to move.
    pub fn check(session: &GameSession, symbol: Symbol) -> Result<(), EngineError> {
        if session.to_move() == symbol {
            Ok(())
        } else {
            Err(EngineError::NotYourTurn(symbol))
        }
    }
}

/// Precondition: the index is on the board and the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `OutOfRange` or `Occupied`.
    pub fn check(session: &GameSession, index: usize) -> Result<(), EngineError> {
        if is_legal_move(session.board(), index) {
            Ok(())
        } else if index >= BOARD_SIZE {
            Err(EngineError::OutOfRange(index))
        } else {
            Err(EngineError::Occupied(index))
        }
    }
}

/// Composite precondition: active session, mover's turn, empty cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in that order.
    #[instrument(level = "debug", skip(session))]
    pub fn check(session: &GameSession, mv: &Move) -> Result<(), EngineError> {
        SessionActive::check(session)?;
        PlayersTurn::check(session, mv.symbol)?;
        CellIsEmpty::check(session, mv.index)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move to a session.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions:
/// - exactly one move was appended to the history
/// - every [`SessionInvariants`] member holds
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, mv: &Move) -> Result<(), EngineError> {
        LegalMove::check(session, mv)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), EngineError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(EngineError::InvariantViolation(format!(
                "Postcondition failed: history grew from {} to {}",
                before.history().len(),
                after.history().len()
            )));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_precondition_empty_cell() {
        let session = GameSession::new(Symbol::X);
        assert!(MoveContract::pre(&session, &Move::new(Symbol::X, 4)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut session = GameSession::new(Symbol::O);
        session.compute_opponent_move().unwrap();
        let taken = session.history()[0].index;
        assert_eq!(
            MoveContract::pre(&session, &Move::new(Symbol::O, taken)),
            Err(EngineError::Occupied(taken))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let session = GameSession::new(Symbol::X);
        assert_eq!(
            MoveContract::pre(&session, &Move::new(Symbol::O, 4)),
            Err(EngineError::NotYourTurn(Symbol::O))
        );
    }

    #[test]
    fn test_precondition_out_of_range() {
        let session = GameSession::new(Symbol::X);
        assert_eq!(
            MoveContract::pre(&session, &Move::new(Symbol::X, 12)),
            Err(EngineError::OutOfRange(12))
        );
    }

    #[test]
    fn test_cell_check_agrees_with_legality() {
        let mut session = GameSession::new(Symbol::O);
        session.compute_opponent_move().unwrap();
        for index in 0..=BOARD_SIZE {
            assert_eq!(
                CellIsEmpty::check(&session, index).is_ok(),
                is_legal_move(session.board(), index),
                "index {index}"
            );
        }
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::new(Symbol::X);
        let mut after = before.clone();
        after.submit_human_move(4).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameSession::new(Symbol::X);
        let mut after = before.clone();
        after.submit_human_move(4).unwrap();
        after.board_mut().set(0, Cell::Mark(Symbol::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_new_move() {
        let session = GameSession::new(Symbol::X);
        assert!(matches!(
            MoveContract::post(&session, &session),
            Err(EngineError::InvariantViolation(_))
        ));
    }
}
