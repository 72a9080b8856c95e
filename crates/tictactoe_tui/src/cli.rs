//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against the computer, in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a simple computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to engine config (TOML). Ignored if the file does not exist.
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Fixed seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the legacy random fallback that never picks the last empty cell
    #[arg(long)]
    pub legacy_fallback: bool,

    /// File to write logs to
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}
