//! Console front end for Save Our Planet.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{prelude::*, EnvFilter};

use save_our_planet::core::config::DEFAULT_SEED;
use save_our_planet::core::GameRng;
use save_our_planet::error::GameError;
use save_our_planet::rules::TurnEngine;
use save_our_planet::ui::ConsolePort;

/// Play Save Our Planet on the terminal.
#[derive(Parser, Debug)]
#[command(name = "save-our-planet")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the dice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(DEFAULT_SEED, |d| d.as_nanos() as u64)
    });

    let stdin = io::stdin();
    let mut port = ConsolePort::new(stdin.lock(), io::stdout());

    let outcome = TurnEngine::setup(&mut port, GameRng::new(seed))
        .and_then(|mut engine| engine.run(&mut port));

    match outcome {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed) => {
            warn!(seed, "input closed before the game finished");
            Ok(())
        }
        Err(err) => Err(err).context("game aborted"),
    }
}

/// Logs go to stderr so they never interleave with the game console.
/// Filter with `RUST_LOG`; warnings only by default.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
