//! # Token Subcommand
//!
//! Supply operations and confidential transfers. For `transfer`, the CLI
//! plays the ciphertext-producer role: it encrypts the amount and mints the
//! input proof with the state file's backend before invoking the ledger.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use ctl_core::Address;

use crate::state;

/// Arguments for the `ctl token` subcommand.
#[derive(Args, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands.
#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Mint tokens to an account (owner only).
    Mint {
        /// Calling address; must be the owner.
        #[arg(long)]
        caller: Address,
        /// Recipient address.
        #[arg(long)]
        to: Address,
        /// Amount in base units (10^-decimals tokens).
        #[arg(long)]
        amount: u64,
    },

    /// Burn up to the held amount from an account (owner only).
    Burn {
        /// Calling address; must be the owner.
        #[arg(long)]
        caller: Address,
        /// Account to burn from.
        #[arg(long)]
        from: Address,
        /// Amount in base units.
        #[arg(long)]
        amount: u64,
    },

    /// Confidentially transfer tokens to another allowlisted account.
    Transfer {
        /// Sending address; must be allowlisted.
        #[arg(long)]
        caller: Address,
        /// Recipient address; must be allowlisted.
        #[arg(long)]
        to: Address,
        /// Amount in base units. Encrypted locally before submission.
        #[arg(long)]
        amount: u64,
    },
}

/// Execute the token subcommand.
pub fn run_token(args: &TokenArgs, ledger_path: &Path) -> Result<u8> {
    let mut ledger = state::load(ledger_path)?;

    match &args.command {
        TokenCommand::Mint { caller, to, amount } => {
            ledger.mint(caller, *to, *amount)?;
            state::save(ledger_path, &ledger)?;
            println!("OK: minted {amount} base units to {to}");
        }
        TokenCommand::Burn {
            caller,
            from,
            amount,
        } => {
            ledger.burn(caller, *from, *amount)?;
            state::save(ledger_path, &ledger)?;
            println!("OK: burn of up to {amount} base units applied to {from}");
        }
        TokenCommand::Transfer { caller, to, amount } => {
            let id = *ledger.id();
            let (ciphertext, proof) = ledger.algebra().encrypt(*amount, &id, caller);
            ledger.transfer(*caller, *to, &ciphertext, &proof)?;
            state::save(ledger_path, &ledger)?;
            // Success does not disclose whether value moved.
            println!("OK: transfer submitted from {caller} to {to}");
        }
    }
    Ok(0)
}
