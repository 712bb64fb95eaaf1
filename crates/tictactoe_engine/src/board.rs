//! Core board types for tic-tac-toe.

use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Symbol X (always moves first).
    #[serde(alias = "x")]
    X,
    /// Symbol O.
    #[serde(alias = "o")]
    O,
}

impl Symbol {
    /// Returns the opposite symbol.
    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a symbol.
    Mark(Symbol),
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Indices of empty cells, ascending.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Mark(symbol))
            .count()
    }

    /// Places `symbol` at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index >= 9`, `Occupied` if the cell holds a mark.
    /// The board is untouched on error.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, index: usize, symbol: Symbol) -> Result<(), EngineError> {
        match self.get(index) {
            None => Err(EngineError::OutOfRange(index)),
            Some(Cell::Mark(_)) => Err(EngineError::Occupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Mark(symbol);
                Ok(())
            }
        }
    }

    /// Retracts the mark at `index`, restoring it to empty.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index >= 9`, `NothingToRetract` if the cell is empty.
    #[instrument(level = "trace", skip(self))]
    pub fn unplace(&mut self, index: usize) -> Result<(), EngineError> {
        match self.get(index) {
            None => Err(EngineError::OutOfRange(index)),
            Some(Cell::Empty) => Err(EngineError::NothingToRetract(index)),
            Some(Cell::Mark(_)) => {
                self.cells[index] = Cell::Empty;
                Ok(())
            }
        }
    }

    /// Returns a copy of this board with `symbol` placed at `index`.
    pub fn apply_move(&self, index: usize, symbol: Symbol) -> Result<Board, EngineError> {
        let mut next = *self;
        next.place(index, symbol)?;
        Ok(next)
    }

    /// Unchecked write used by the search, which only visits empty indices.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Mark(symbol) => write!(f, "{}", symbol)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses nine cells: `X`/`O` (any case) for marks, `.`, `_`, `-` or a
    /// digit for empty. Whitespace, `|` and `-+-+-` row separator lines are
    /// skipped, so the `Display` output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        let mut count = 0;

        let chars = s
            .lines()
            .filter(|line| !is_row_separator(line))
            .flat_map(str::chars)
            .filter(|c| !c.is_whitespace() && *c != '|');

        for ch in chars {
            let cell = match ch {
                'X' | 'x' => Cell::Mark(Symbol::X),
                'O' | 'o' => Cell::Mark(Symbol::O),
                '.' | '_' | '-' => Cell::Empty,
                c if c.is_ascii_digit() => Cell::Empty,
                other => {
                    return Err(EngineError::InvalidBoard(format!(
                        "unexpected character '{}'",
                        other
                    )));
                }
            };
            if count == BOARD_SIZE {
                return Err(EngineError::InvalidBoard(
                    "more than 9 cells".to_string(),
                ));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected 9 cells, found {}",
                count
            )));
        }

        Ok(Self { cells })
    }
}

/// A line made only of `-`, `+` and spaces, with at least one `+`.
fn is_row_separator(line: &str) -> bool {
    line.contains('+') && line.chars().all(|c| matches!(c, '-' | '+' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices().count(), 9);
        assert_eq!(board.count(Symbol::X), 0);
    }

    #[test]
    fn test_place_occupied_rejected() {
        let mut board = Board::new();
        board.place(4, Symbol::X).unwrap();
        assert_eq!(board.place(4, Symbol::O), Err(EngineError::Occupied(4)));
        assert_eq!(board.get(4), Some(Cell::Mark(Symbol::X)));
    }

    #[test]
    fn test_place_out_of_range_rejected() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Symbol::X), Err(EngineError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_unplace_empty_rejected() {
        let mut board = Board::new();
        assert_eq!(board.unplace(3), Err(EngineError::NothingToRetract(3)));
    }

    #[test]
    fn test_apply_move_leaves_original() {
        let board = Board::new();
        let next = board.apply_move(0, Symbol::O).unwrap();
        assert!(board.is_empty(0));
        assert_eq!(next.get(0), Some(Cell::Mark(Symbol::O)));
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O ... ..X".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|O\n-+-+-\n4|5|6\n-+-+-\n7|8|X");
    }

    #[test]
    fn test_parse_accepts_display_output() {
        let board: Board = "X.O ... ..X".parse().unwrap();
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_dash_rows_without_plus_are_cells() {
        let board: Board = "---\n---\n--X".parse().unwrap();
        assert_eq!(board.empty_indices().count(), 8);
        assert_eq!(board.get(8), Some(Cell::Mark(Symbol::X)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XOX".parse::<Board>(),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(
            "XOXOXOXOZ".parse::<Board>(),
            Err(EngineError::InvalidBoard(_))
        ));
    }
}
