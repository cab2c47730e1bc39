//! Tic-tac-toe - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use std::io::{self, Write};
use tictactoe::tictactoe_rules::{GameSession, RecordingFrontend};
use tictactoe::{ConsoleFrontend, GameConfig, ReplayTranscript, parse_moves, play_script};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(&game),
        Command::Replay { game, json, moves } => run_replay(&game, json, &moves),
    }
}

/// Builds the effective config: file (or defaults), then environment, then flags.
#[instrument(skip(args))]
fn load_config(args: &GameArgs) -> Result<GameConfig> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = config
        .with_env_overrides()
        .with_names(args.player1.as_deref(), args.player2.as_deref());
    let sound = *config.sound() && !args.no_sound;
    let color = *config.color() && !args.no_color;
    let config = config.with_sound(sound).with_color(color);
    debug!(?config, "Effective configuration");
    Ok(config)
}

/// Run an interactive game on stdin/stdout
fn run_play(args: &GameArgs) -> Result<()> {
    let config = load_config(args)?;
    info!("Starting interactive game");

    let frontend = ConsoleFrontend::new(io::stdout(), *config.color(), *config.sound());
    let mut session = GameSession::start(frontend, config.player1(), config.player2());
    tictactoe::run(io::stdin().lock(), &mut session)?;
    Ok(())
}

/// Play a scripted game
fn run_replay(args: &GameArgs, json: bool, moves: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let moves = parse_moves(moves)?;

    if json {
        let session = play_script(
            RecordingFrontend::new(),
            config.player1(),
            config.player2(),
            &moves,
        );
        let transcript = ReplayTranscript::from(session);
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &transcript)?;
        writeln!(out)?;
    } else {
        let frontend = ConsoleFrontend::new(io::stdout(), *config.color(), *config.sound());
        play_script(frontend, config.player1(), config.player2(), &moves);
    }
    Ok(())
}
