//! One-shot position analysis.

use serde::Serialize;
use tictactoe_engine::{
    best_move, score_moves, winner, Board, Cell, EngineError, Position, ScoredMove, Symbol,
};
use tracing::{instrument, warn};

/// Root scores for every move available to `opponent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Position analysed, in the compact `XX.OO....` form.
    pub board: String,
    /// Symbol to move.
    pub opponent: Symbol,
    /// Every candidate, in index order.
    pub moves: Vec<ScoredMove>,
    /// First candidate with the highest score.
    pub best: ScoredMove,
}

/// Scores every empty cell of `board` for `opponent`.
///
/// # Errors
///
/// `BoardFull` if no cell is empty.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, opponent: Symbol) -> Result<Analysis, EngineError> {
    if let Some((symbol, line)) = winner(board) {
        warn!(%symbol, ?line, "Analyzing a position that is already won");
    }

    let moves = score_moves(board, opponent, opponent.other())?;
    let best = best_move(&moves).ok_or(EngineError::BoardFull)?;

    Ok(Analysis {
        board: compact(board),
        opponent,
        moves,
        best,
    })
}

fn compact(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Empty => '.',
            Cell::Mark(Symbol::X) => 'X',
            Cell::Mark(Symbol::O) => 'O',
        })
        .collect()
}

fn position_label(index: usize) -> &'static str {
    Position::from_index(index).map_or("?", |p| p.label())
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Moves for {} on {}:", self.opponent, self.board)?;
        for mv in &self.moves {
            writeln!(
                f,
                "  {} {:<14} {:+}",
                mv.index + 1,
                position_label(mv.index),
                mv.score
            )?;
        }
        write!(
            f,
            "Best: {} ({})",
            self.best.index + 1,
            position_label(self.best.index)
        )
    }
}
