//! CLI frontend for the Torchbound turn order engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tb",
    about = "Torchbound — initiative and turn order resolution",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a template encounter file
    Init {
        /// Path of the encounter file to create
        #[arg(default_value = "encounter.json")]
        file: PathBuf,
    },

    /// Validate an encounter file without resolving it
    Check {
        /// Encounter file
        #[arg(short, long, default_value = "encounter.json")]
        file: PathBuf,
    },

    /// Resolve and display the round's acting order
    Resolve {
        /// Encounter file
        #[arg(short, long, default_value = "encounter.json")]
        file: PathBuf,
    },

    /// Generate a random encounter and walk it round by round
    Demo {
        /// Number of rounds to play through
        #[arg(short, long, default_value = "3")]
        rounds: u32,

        /// RNG seed for a reproducible roster
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { file } => commands::init::run(&file),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Resolve { file } => commands::resolve::run(&file),
        Commands::Demo { rounds, seed } => commands::demo::run(rounds, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
