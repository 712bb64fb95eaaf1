//! Tic-tac-toe engine with a perfect-play minimax opponent.
//!
//! The crate is a pure in-process library: no I/O, no global state.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Symbol`] and the rule functions
//!   ([`check_win`], [`check_draw`], [`is_legal_move`]).
//! - **Search**: [`find_best_move`] explores the full game tree.
//! - **Session**: [`GameSession`] is the turn state machine a view layer
//!   drives with [`GameSession::submit_human_move`] and
//!   [`GameSession::compute_opponent_move`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, MoveResult, Symbol};
//!
//! # fn example() -> Result<(), tictactoe_engine::EngineError> {
//! let mut session = GameSession::new(Symbol::X);
//! assert_eq!(session.submit_human_move(4)?, MoveResult::Continue);
//! let reply = session.compute_opponent_move()?;
//! assert_eq!(reply, MoveResult::Continue);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod error;
mod invariants;
mod position;
mod rules;
mod search;
mod session;

// Crate-level exports - Board model
pub use board::{Board, Cell, Symbol, BOARD_SIZE};

// Crate-level exports - Rules
pub use rules::{check_draw, check_win, is_legal_move, winner, WinLine, WIN_LINES};

// Crate-level exports - Search
pub use search::{best_move, find_best_move, score_moves, ScoredMove, DRAW_SCORE, WIN_SCORE};

// Crate-level exports - Session
pub use session::{GameSession, Move, MoveResult, SessionStatus};

// Crate-level exports - Contracts and invariants
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, PlayersTurn, SessionActive};
pub use invariants::{
    BalancedMarksInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants, TerminalStatusInvariant, TurnOrderInvariant,
};

// Crate-level exports - Positions and errors
pub use error::EngineError;
pub use position::Position;
