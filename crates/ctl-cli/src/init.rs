//! # Init Subcommand
//!
//! Creates a new ledger state file with a fresh instance identity, a fresh
//! reference backend, the given owner, and default faucet settings.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use ctl_algebra::ClearAlgebra;
use ctl_core::{Address, LedgerId};
use ctl_ledger::{Ledger, TokenMetadata};

use crate::state;

/// Arguments for the `ctl init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Owner address (0x-prefixed hex).
    #[arg(long)]
    pub owner: Address,

    /// Token name.
    #[arg(long, default_value = "Confidential USD")]
    pub name: String,

    /// Token ticker symbol.
    #[arg(long, default_value = "cUSD")]
    pub symbol: String,

    /// Token decimal places.
    #[arg(long, default_value_t = 6)]
    pub decimals: u8,
}

/// Execute the init subcommand.
pub fn run_init(args: &InitArgs, ledger_path: &Path) -> Result<u8> {
    if ledger_path.exists() {
        bail!("ledger state file already exists: {}", ledger_path.display());
    }

    let metadata = TokenMetadata {
        name: args.name.clone(),
        symbol: args.symbol.clone(),
        decimals: args.decimals,
    };
    let ledger = Ledger::new(LedgerId::new(), args.owner, metadata, ClearAlgebra::new())?;
    state::save(ledger_path, &ledger)?;

    println!("OK: initialized {} ({})", ledger.id(), args.symbol);
    println!("  Owner: {}", args.owner);
    println!("  State: {}", ledger_path.display());
    Ok(0)
}
