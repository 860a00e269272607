//! # ctl CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! All commands operate on a local JSON ledger state file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ctl_cli::access::{run_access, AccessArgs};
use ctl_cli::faucet::{run_faucet, FaucetArgs};
use ctl_cli::init::{run_init, InitArgs};
use ctl_cli::query::{run_query, QueryArgs};
use ctl_cli::token::{run_token, TokenArgs};

/// Confidential token ledger CLI.
///
/// Initializes a local ledger state file and drives mint, burn,
/// confidential transfer, allowlist, and faucet operations against it.
/// Balances and transfer amounts are held as ciphertext; reads return
/// opaque handles unless a local `--reveal` decryption is requested.
#[derive(Parser, Debug)]
#[command(name = "ctl", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the ledger state file.
    #[arg(long, global = true, default_value = "ledger.json")]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new ledger state file.
    Init(InitArgs),

    /// Mint, burn, and confidential transfer.
    Token(TokenArgs),

    /// Allowlist management and ownership transfer.
    Access(AccessArgs),

    /// Faucet claims, status, and configuration.
    Faucet(FaucetArgs),

    /// Balance, supply, and instance info reads.
    Query(QueryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Init(args) => run_init(&args, &cli.ledger),
        Commands::Token(args) => run_token(&args, &cli.ledger),
        Commands::Access(args) => run_access(&args, &cli.ledger),
        Commands::Faucet(args) => run_faucet(&args, &cli.ledger),
        Commands::Query(args) => run_query(&args, &cli.ledger),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
