use anyhow::Context;
use bitloom::{generate, generate_seeded, verify, Generation};
use clap::Parser;
use tracing::info;

mod cli;
use cli::{display, Cli};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only the outcome line.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();
}

/// Generate, re-verify, print the outcome. Returns whether it was accepted.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let generation = match cli.seed {
        Some(seed) => generate_seeded(cli.length, seed),
        None => generate(cli.length),
    }
    .with_context(|| format!("cannot generate {} bits", cli.length))?;

    let accepted = accept(&generation);
    info!(
        length = generation.len(),
        accepted,
        nodes = generation.stats.nodes,
        backtracks = generation.stats.backtracks,
        "run complete"
    );

    println!("{}", display::outcome(accepted));
    Ok(accepted)
}

/// The generator already self-checks; the driver checks again before
/// accepting.
fn accept(generation: &Generation) -> bool {
    generation.success && verify(&generation.bits)
}
