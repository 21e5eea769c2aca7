//! dragboard - drag pieces around a terminal chessboard.
//!
//! With no subcommand the interactive board starts from `--fen`, the
//! `DRAGBOARD_FEN` environment variable, or the standard position. The
//! `decode` and `check` subcommands expose the decoder and the move-shape
//! check for scripting.

use board_tui::{config, logging, ui};
use chess::{ChessError, Grid};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "dragboard", about = "Terminal chessboard with drag-and-drop moves")]
struct Cli {
    /// Starting position in FEN (only the placement field is used).
    #[arg(long, global = true)]
    fen: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a position and print the board.
    Decode {
        /// Position to decode; defaults to --fen or the configured start.
        notation: Option<String>,

        /// Print the grid as JSON instead of a diagram.
        #[arg(long)]
        json: bool,
    },
    /// Check whether a piece may move between two squares by shape alone.
    Check {
        /// Piece glyph (e.g. ♘) or letter (e.g. N, n for black).
        piece: char,
        from: String,
        to: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("failed to encode grid: {0}")]
    Json(#[from] serde_json::Error),
}

fn decode_command(notation: &str, json: bool) -> Result<String, CliError> {
    let grid: Grid = chess::decode(notation).map_err(ChessError::from)?;
    if json {
        Ok(serde_json::to_string_pretty(&grid)?)
    } else {
        Ok(grid.to_string())
    }
}

fn check_command(piece: char, from: &str, to: &str) -> Result<&'static str, CliError> {
    let legal = chess::is_legal_shape(piece, from, to).map_err(ChessError::from)?;
    Ok(if legal { "legal" } else { "illegal" })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fen = cli.fen.unwrap_or_else(config::get_start_fen);

    match cli.command {
        Some(Commands::Decode { notation, json }) => {
            logging::init_stderr_logging();
            let notation = notation.unwrap_or(fen);
            println!("{}", decode_command(&notation, json)?);
        }
        Some(Commands::Check { piece, from, to }) => {
            logging::init_stderr_logging();
            println!("{}", check_command(piece, &from, &to)?);
        }
        None => {
            let log_dir = config::get_log_dir();
            let _guard = logging::init_file_logging(&log_dir)?;
            tracing::info!(fen = %fen, "dragboard starting up");

            let tick = Duration::from_millis(config::get_tick_ms());
            ui::run_app(&fen, ui::theme::Theme::detect(), tick).await?;

            tracing::info!("dragboard shutting down");
        }
    }

    Ok(())
}
