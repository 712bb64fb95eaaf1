//! Game session: the turn state machine a view layer drives.
//!
//! A session binds one symbol to the human and the other to the computer
//! opponent. X always moves first. Every move goes through
//! [`MoveContract`]: preconditions always, postconditions in debug builds.
//! A rejected move leaves the session untouched.

use crate::contracts::{Contract, MoveContract, PlayersTurn, SessionActive};
use crate::rules::{check_draw, check_win, WinLine};
use crate::search::find_best_move;
use crate::{Board, EngineError, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A symbol placed at a board index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The symbol placed.
    pub symbol: Symbol,
    /// The board index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.index)
    }
}

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Game continues with the other side to move.
    Continue,
    /// The mover completed a line.
    Win {
        /// The winning symbol.
        symbol: Symbol,
        /// The completed line.
        line: WinLine,
    },
    /// The board filled with no line completed.
    Draw,
}

impl MoveResult {
    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveResult::Continue)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            MoveResult::Win { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveResult::Continue => write!(f, "Continue"),
            MoveResult::Win { symbol, line } => {
                let [a, b, c] = line.indices();
                write!(f, "{} wins on {}-{}-{}", symbol, a, b, c)
            }
            MoveResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Whether the session accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Moves are accepted.
    Active,
    /// The game ended in a win or draw.
    Finished,
}

/// A single-player game against the minimax opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    human: Symbol,
    opponent: Symbol,
    to_move: Symbol,
    status: SessionStatus,
    history: Vec<Move>,
    result: Option<MoveResult>,
}

impl GameSession {
    /// Creates an active session with an empty board and X to move.
    ///
    /// Does not move for the opponent; if the opponent is X, call
    /// [`compute_opponent_move`](Self::compute_opponent_move) next.
    #[instrument]
    pub fn new(human: Symbol) -> Self {
        info!(%human, opponent = %human.other(), "Creating game session");
        Self {
            board: Board::new(),
            human,
            opponent: human.other(),
            to_move: Symbol::X,
            status: SessionStatus::Active,
            history: Vec::new(),
            result: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human's symbol.
    pub fn human(&self) -> Symbol {
        self.human
    }

    /// Returns the opponent's symbol.
    pub fn opponent(&self) -> Symbol {
        self.opponent
    }

    /// Returns the symbol to move.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Returns the session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns true while the session accepts moves.
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Returns true if the session is active and the human is to move.
    pub fn is_human_turn(&self) -> bool {
        self.is_active() && self.to_move == self.human
    }

    /// Returns true if the session is active and the opponent is to move.
    pub fn is_opponent_turn(&self) -> bool {
        self.is_active() && self.to_move == self.opponent
    }

    /// Returns the moves played this game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns the final result once the session has finished.
    pub fn result(&self) -> Option<MoveResult> {
        self.result
    }

    /// Places the human's symbol at `index`.
    ///
    /// # Errors
    ///
    /// `GameOver`, `NotYourTurn`, `OutOfRange` or `Occupied`. The session is
    /// unchanged on error.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<MoveResult, EngineError> {
        self.apply(Move::new(self.human, index))
    }

    /// Runs the search and places the opponent's symbol at the best index.
    ///
    /// # Errors
    ///
    /// `GameOver` or `NotYourTurn`. The session is unchanged on error.
    #[instrument(skip(self), fields(opponent = %self.opponent))]
    pub fn compute_opponent_move(&mut self) -> Result<MoveResult, EngineError> {
        SessionActive::check(self)?;
        PlayersTurn::check(self, self.opponent)?;

        let index = find_best_move(&self.board, self.opponent, self.human)?;
        debug!(index, "Opponent chose move");
        self.apply(Move::new(self.opponent, index))
    }

    /// Clears the board and history, keeping the symbol binding.
    ///
    /// If the opponent plays X it moves immediately and its result is
    /// returned.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn reset(&mut self) -> Result<Option<MoveResult>, EngineError> {
        info!("Resetting game session");
        self.board = Board::new();
        self.to_move = Symbol::X;
        self.status = SessionStatus::Active;
        self.history.clear();
        self.result = None;

        if self.opponent == Symbol::X {
            return self.compute_opponent_move().map(Some);
        }
        Ok(None)
    }

    /// Rebinds the human to `human` and resets.
    #[instrument(skip(self))]
    pub fn select_symbol(&mut self, human: Symbol) -> Result<Option<MoveResult>, EngineError> {
        self.human = human;
        self.opponent = human.other();
        self.reset()
    }

    /// Validates and applies one move, then settles win, draw or turn.
    fn apply(&mut self, mv: Move) -> Result<MoveResult, EngineError> {
        MoveContract::pre(self, &mv)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(mv.index, mv.symbol)?;
        self.history.push(mv);

        let result = if let Some(line) = check_win(&self.board, mv.symbol) {
            MoveResult::Win {
                symbol: mv.symbol,
                line,
            }
        } else if check_draw(&self.board) {
            MoveResult::Draw
        } else {
            MoveResult::Continue
        };

        if result.is_terminal() {
            info!(%result, "Game finished");
            self.status = SessionStatus::Finished;
            self.result = Some(result);
        } else {
            self.to_move = mv.symbol.other();
        }

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(result)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_to_move(&mut self, symbol: Symbol) {
        self.to_move = symbol;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_binding() {
        let session = GameSession::new(Symbol::O);
        assert_eq!(session.human(), Symbol::O);
        assert_eq!(session.opponent(), Symbol::X);
        assert_eq!(session.to_move(), Symbol::X);
        assert!(session.is_opponent_turn());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_human_move_passes_turn() {
        let mut session = GameSession::new(Symbol::X);
        assert_eq!(session.submit_human_move(4), Ok(MoveResult::Continue));
        assert_eq!(session.to_move(), Symbol::O);
        assert_eq!(session.last_move(), Some(Move::new(Symbol::X, 4)));
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = GameSession::new(Symbol::X);
        session.submit_human_move(4).unwrap();
        let snapshot = session.clone();

        assert_eq!(
            session.submit_human_move(0),
            Err(EngineError::NotYourTurn(Symbol::X))
        );
        session.compute_opponent_move().unwrap();
        let after_reply = session.clone();
        assert_eq!(session.submit_human_move(4), Err(EngineError::Occupied(4)));
        assert_eq!(session.submit_human_move(9), Err(EngineError::OutOfRange(9)));
        assert_eq!(session, after_reply);
        assert_ne!(session, snapshot);
    }

    #[test]
    fn test_opponent_out_of_turn_rejected() {
        let mut session = GameSession::new(Symbol::X);
        assert_eq!(
            session.compute_opponent_move(),
            Err(EngineError::NotYourTurn(Symbol::O))
        );
    }

    #[test]
    fn test_win_finishes_session() {
        let mut session = GameSession::new(Symbol::O);
        // X opens at 0; O wanders along the top row and X takes the left column.
        assert_eq!(session.compute_opponent_move(), Ok(MoveResult::Continue));
        session.submit_human_move(1).unwrap();
        assert_eq!(session.compute_opponent_move(), Ok(MoveResult::Continue));
        assert_eq!(session.last_move(), Some(Move::new(Symbol::X, 3)));
        session.submit_human_move(2).unwrap();

        let last = session.compute_opponent_move().unwrap();
        assert_eq!(
            last,
            MoveResult::Win {
                symbol: Symbol::X,
                line: crate::WIN_LINES[3],
            }
        );
        assert!(!session.is_active());
        assert_eq!(session.result(), Some(last));
        assert_eq!(session.submit_human_move(8), Err(EngineError::GameOver));
        assert_eq!(session.compute_opponent_move(), Err(EngineError::GameOver));
    }

    #[test]
    fn test_reset_with_opponent_first_moves_immediately() {
        let mut session = GameSession::new(Symbol::O);
        let opening = session.reset().unwrap();
        assert_eq!(opening, Some(MoveResult::Continue));
        assert_eq!(session.last_move(), Some(Move::new(Symbol::X, 0)));
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_reset_with_human_first_waits() {
        let mut session = GameSession::new(Symbol::X);
        session.submit_human_move(4).unwrap();
        assert_eq!(session.reset(), Ok(None));
        assert_eq!(*session.board(), Board::new());
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_select_symbol_rebinds() {
        let mut session = GameSession::new(Symbol::X);
        session.submit_human_move(4).unwrap();
        session.select_symbol(Symbol::O).unwrap();
        assert_eq!(session.human(), Symbol::O);
        assert_eq!(session.opponent(), Symbol::X);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_move_result_display() {
        let result = MoveResult::Win {
            symbol: Symbol::X,
            line: crate::WIN_LINES[6],
        };
        assert_eq!(result.to_string(), "X wins on 0-4-8");
        assert_eq!(MoveResult::Draw.to_string(), "Draw");
    }
}
