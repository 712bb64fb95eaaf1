//! Engine error taxonomy.
//!
//! Every variant is a caller contract violation. The engine never masks
//! one as a no-op; the view layer may pre-filter them instead.

use crate::Symbol;

/// Error returned when an engine operation's precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Index is outside the 0-8 range.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell at the index already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// Retracting a move from a cell that holds no mark.
    #[display("Cell {} holds no mark to retract", _0)]
    NothingToRetract(usize),

    /// Search invoked on a board with no empty cell.
    #[display("Board is full, no move to search")]
    BoardFull,

    /// The session has finished and accepts no more moves.
    #[display("Game is already over")]
    GameOver,

    /// The given side tried to move out of turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Symbol),

    /// A textual board could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// A postcondition check failed after a mutation.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
