//! Tic-tac-toe - terminal front end and scripted runner.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tictactoe_engine::{Board, GameConfig, GameEngine, GameStatus, Player, Position, tui};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Tui => tui::run_tui(config),
        Command::Play { moves, json } => run_play(&moves, json),
    }
}

/// Final state printed by `play --json`.
#[derive(Debug, Serialize)]
struct PlayReport<'a> {
    board: &'a Board,
    turn: Player,
    status: GameStatus,
    history: &'a [usize],
    rejected: Vec<String>,
}

/// Plays `moves` on a fresh engine and prints the result.
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_play(moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut engine = GameEngine::new();
    let mut rejected = Vec::new();

    for raw in moves {
        let Some(position) = Position::from_label_or_number(raw) else {
            warn!(input = %raw, "Unrecognised cell");
            rejected.push(format!("{}: not a cell", raw));
            continue;
        };
        if let Err(e) = engine.try_apply_move(position.to_index()) {
            warn!(input = %raw, error = %e.kind, "Move ignored");
            rejected.push(format!("{}: {}", raw, e.kind));
        }
    }

    info!(status = %engine.status(), moves = engine.move_count(), "Script finished");

    if json {
        let report = PlayReport {
            board: engine.board(),
            turn: engine.turn(),
            status: engine.status(),
            history: engine.history(),
            rejected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", engine.board().display());
        for reason in &rejected {
            println!("ignored {}", reason);
        }
        match engine.status() {
            GameStatus::InProgress => println!("In progress, {} to move", engine.turn()),
            status => println!("{}", status),
        }
    }

    Ok(())
}
