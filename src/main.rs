//! Rock TCG - play the rock-type card battle against the computer.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Rock TCG - a text card battle against a scripted opponent
#[derive(Parser, Debug)]
#[command(name = "rock-tcg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause between the computer's actions in milliseconds
    #[arg(long, default_value = "1000")]
    delay_ms: u64,

    /// Name shown for your side of the table
    #[arg(short, long, default_value = "PLAYER")]
    name: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\nGame interrupted. Thanks for playing!");
        std::process::exit(0);
    }) {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "launch");

    match cli::play::execute(seed, args.delay_ms, args.name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
