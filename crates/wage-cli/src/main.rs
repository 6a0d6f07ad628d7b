//! CLI frontend for the WAGE adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wage",
    about = "WAGE: play and inspect turn-based adventure worlds",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world, one line of input per turn
    Play {
        /// World definition file (JSON)
        #[arg(short, long)]
        world: PathBuf,

        /// RNG seed for deterministic play
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Show scenes, characters and objects after initial placement
    Info {
        /// World definition file (JSON)
        #[arg(short, long)]
        world: PathBuf,

        /// RNG seed used for random placements
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Validate a world definition
    Check {
        /// World definition file (JSON)
        #[arg(short, long)]
        world: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { world, seed } => commands::play::run(&world, seed),
        Commands::Info { world, seed } => commands::info::run(&world, seed),
        Commands::Check { world } => commands::check::run(&world),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
