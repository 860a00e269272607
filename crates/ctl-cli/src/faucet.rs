//! # Faucet Subcommand
//!
//! Claim, status, and owner configuration for the onboarding faucet. Claim
//! timing uses the system clock; the ledger itself only ever sees the
//! whole-second timestamps passed in.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use ctl_core::{Address, Clock, SystemClock};

use crate::state;

/// Arguments for the `ctl faucet` subcommand.
#[derive(Args, Debug)]
pub struct FaucetArgs {
    #[command(subcommand)]
    pub command: FaucetCommand,
}

/// Faucet subcommands.
#[derive(Subcommand, Debug)]
pub enum FaucetCommand {
    /// Claim the faucet amount. First-time claimants are auto-allowlisted.
    Claim {
        /// Claiming address.
        #[arg(long)]
        caller: Address,
    },

    /// Show faucet settings and the claim window for an address.
    Status {
        /// Address whose claim window to show.
        #[arg(long)]
        address: Address,
    },

    /// Replace the faucet amount and cooldown (owner only).
    Configure {
        /// Calling address; must be the owner.
        #[arg(long)]
        caller: Address,
        /// New amount per claim, in base units.
        #[arg(long)]
        amount: u64,
        /// New cooldown between claims, in seconds.
        #[arg(long)]
        cooldown: u64,
    },
}

/// Execute the faucet subcommand.
pub fn run_faucet(args: &FaucetArgs, ledger_path: &Path) -> Result<u8> {
    run_faucet_at(args, ledger_path, &SystemClock)
}

/// Execute the faucet subcommand against an explicit clock.
pub fn run_faucet_at(args: &FaucetArgs, ledger_path: &Path, clock: &dyn Clock) -> Result<u8> {
    let mut ledger = state::load(ledger_path)?;

    match &args.command {
        FaucetCommand::Claim { caller } => {
            ledger.claim_faucet(*caller, clock.now())?;
            state::save(ledger_path, &ledger)?;
            println!(
                "OK: claimed {} base units for {caller}",
                ledger.faucet_amount()
            );
        }
        FaucetCommand::Status { address } => {
            let now = clock.now();
            println!("Faucet:");
            println!("  Amount: {} base units", ledger.faucet_amount());
            println!("  Cooldown: {} s", ledger.faucet_cooldown());
            println!("  Last claim by {address}: {}", ledger.last_faucet_claim(address));
            println!(
                "  Next claim in: {} s",
                ledger.time_until_next_claim(address, now)
            );
        }
        FaucetCommand::Configure {
            caller,
            amount,
            cooldown,
        } => {
            ledger.set_faucet_settings(caller, *amount, *cooldown)?;
            state::save(ledger_path, &ledger)?;
            println!("OK: faucet set to {amount} base units every {cooldown} s");
        }
    }
    Ok(0)
}
