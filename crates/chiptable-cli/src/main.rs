//! `chiptable` - operator CLI for the chip registry
//!
//! Deploys a registry state file and populates it with TSMs and chips.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use chiptable_cli::commands;

#[derive(Parser)]
#[command(name = "chiptable")]
#[command(about = "Chip registry operator tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    yes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a fresh registry state file
    Deploy {
        /// Owner identity of the registry
        #[arg(short, long)]
        owner: String,

        /// Version string of the registry
        #[arg(long)]
        version: String,

        /// Registry state file to create
        #[arg(short, long)]
        state: PathBuf,
    },

    /// Register a TSM (owner only)
    RegisterTsm {
        /// Registry state file
        #[arg(short, long)]
        state: PathBuf,

        /// Identity submitting the call
        #[arg(long)]
        caller: String,

        /// TSM identity to register
        #[arg(short, long)]
        tsm: String,

        /// URI for the TSM
        #[arg(short, long)]
        uri: String,
    },

    /// Register chips for a TSM from a public-key file (owner only)
    RegisterChips {
        /// Registry state file
        #[arg(short, long)]
        state: PathBuf,

        /// Identity submitting the call
        #[arg(long)]
        caller: String,

        /// TSM the chips will belong to
        #[arg(short, long)]
        tsm: String,

        /// Newline-delimited list of hex public keys
        #[arg(short, long)]
        public_key_path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Commands::Deploy {
            owner,
            version,
            state,
        } => commands::deploy::run(&owner, &version, &state, cli.yes),

        Commands::RegisterTsm {
            state,
            caller,
            tsm,
            uri,
        } => commands::register_tsm::run(&state, &caller, &tsm, &uri, cli.yes),

        Commands::RegisterChips {
            state,
            caller,
            tsm,
            public_key_path,
        } => commands::register_chips::run(&state, &caller, &tsm, &public_key_path, cli.yes),
    }
}
