//! tictactoe: play against a perfect opponent or analyze a position.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_cli::{analyze, Cli, Command, PlayConfig, SymbolArg, TurnController};
use tictactoe_engine::{Board, Symbol};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            symbol,
            config,
            delay_ms,
            hints,
        } => run_play(symbol, config, delay_ms, hints).await,
        Command::Analyze {
            board,
            opponent,
            json,
        } => run_analyze(&board, opponent, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
async fn run_play(
    symbol: Option<SymbolArg>,
    config: Option<PathBuf>,
    delay_ms: Option<u64>,
    hints: bool,
) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(
        symbol.map(Symbol::from),
        delay_ms,
        hints,
    );
    info!(?config, "Starting game");

    let stdin = std::io::stdin();
    let mut controller = TurnController::new(config, stdin.lock(), std::io::stdout());
    let tally = controller.run().await?;

    info!(%tally, "Game over");
    Ok(())
}

/// Print the scores of every move in a position
#[instrument]
fn run_analyze(board: &str, opponent: SymbolArg, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;
    let analysis = analyze(&board, opponent.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}
