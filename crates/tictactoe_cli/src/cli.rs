//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_engine::Symbol;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect-play opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Symbol you play (X always moves first)
        #[arg(short, long, value_enum)]
        symbol: Option<SymbolArg>,

        /// Path to the config file [default: tictactoe.toml]
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Opponent thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Show minimax scores for your candidate moves
        #[arg(long)]
        hints: bool,
    },

    /// Score every move in a position
    Analyze {
        /// Board as nine cells, e.g. "XX.OO...."
        #[arg(short, long)]
        board: String,

        /// Symbol to move
        #[arg(short, long, value_enum, default_value = "o")]
        opponent: SymbolArg,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Symbol as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymbolArg {
    /// Play X
    X,
    /// Play O
    O,
}

impl From<SymbolArg> for Symbol {
    fn from(arg: SymbolArg) -> Self {
        match arg {
            SymbolArg::X => Symbol::X,
            SymbolArg::O => Symbol::O,
        }
    }
}
