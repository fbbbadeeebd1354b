//! Command-line interface for tactix.

use clap::Parser;

/// Tactix - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Play tic-tac-toe between two players in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (a full row, column, or diagonal wins)
    #[arg(short, long, default_value_t = 3)]
    pub size: usize,

    /// Name shown for the first player (plays X and moves first)
    #[arg(long, default_value = "Player X")]
    pub player_x: String,

    /// Name shown for the second player (plays O)
    #[arg(long, default_value = "Player O")]
    pub player_o: String,

    /// Print move-made and state-changed events during the match
    #[arg(long)]
    pub events: bool,

    /// Print the finished match as a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,
}
