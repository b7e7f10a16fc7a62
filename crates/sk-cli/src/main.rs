//! CLI frontend for the Stadtkette word-chain engine.

mod commands;
mod settings;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sk",
    about = "Stadtkette — the word-chain game of cities",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively
    Play {
        /// Settings file (JSON: alphabet, word list, messages)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Word list path (overrides the settings file)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Alphabet range (overrides the settings file)
        #[arg(long, num_args = 2, value_names = ["FIRST", "LAST"])]
        alphabet: Option<Vec<char>>,
    },

    /// Load the word list and report pools, dead letters, and skips
    Check {
        /// Settings file (JSON: alphabet, word list, messages)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Word list path (overrides the settings file)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Alphabet range (overrides the settings file)
        #[arg(long, num_args = 2, value_names = ["FIRST", "LAST"])]
        alphabet: Option<Vec<char>>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            config,
            words,
            alphabet,
        } => commands::resolve(config.as_deref(), words.as_deref(), alphabet.as_deref())
            .and_then(|(game, messages)| commands::play::run(&game, &messages)),
        Commands::Check {
            config,
            words,
            alphabet,
        } => commands::resolve(config.as_deref(), words.as_deref(), alphabet.as_deref())
            .and_then(|(game, _)| commands::check::run(&game)),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
