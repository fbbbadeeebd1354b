//! Tactix - console tic-tac-toe.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use serde::Serialize;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use tactix::{
    Board, Cell, ConsoleObserver, GameState, HumanProvider, Match, MoveProvider, Outcome,
    StdinSource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shape of the `--json` report for a finished match.
#[derive(Debug, Serialize)]
struct MatchReport {
    size: usize,
    outcome: Outcome,
    state: GameState,
    /// Final grid in row-major order.
    cells: Vec<Cell>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let board = Board::new(cli.size)?;
    info!(size = cli.size, "board created");

    let player_x: Box<dyn MoveProvider> = Box::new(HumanProvider::new(
        cli.player_x,
        StdinSource,
        io::stdout(),
    ));
    let player_o: Box<dyn MoveProvider> = Box::new(HumanProvider::new(
        cli.player_o,
        StdinSource,
        io::stdout(),
    ));

    let mut game = Match::new(board, vec![player_x, player_o])?;

    if cli.events {
        game.board_mut()
            .add_observer(Rc::new(RefCell::new(ConsoleObserver::new(io::stdout()))));
    }

    let outcome = game.run()?;

    if cli.json {
        let report = MatchReport {
            size: game.board().size(),
            outcome,
            state: game.state(),
            cells: game.board().cells().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", game.board().render());
        println!("{outcome}!");
    }

    Ok(())
}
