//! # Access Subcommand
//!
//! Allowlist management and ownership transfer.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use ctl_core::Address;

use crate::state;

/// Arguments for the `ctl access` subcommand.
#[derive(Args, Debug)]
pub struct AccessArgs {
    #[command(subcommand)]
    pub command: AccessCommand,
}

/// Access-control subcommands.
#[derive(Subcommand, Debug)]
pub enum AccessCommand {
    /// Set the allowlist entry for one address (owner only).
    Allow {
        /// Calling address; must be the owner.
        #[arg(long)]
        caller: Address,
        /// Address whose entry is set.
        #[arg(long)]
        target: Address,
        /// Revoke instead of grant.
        #[arg(long)]
        revoke: bool,
    },

    /// Set the allowlist entry for several addresses at once (owner only).
    BatchAllow {
        /// Calling address; must be the owner.
        #[arg(long)]
        caller: Address,
        /// Addresses whose entries are set.
        #[arg(long, num_args = 1..)]
        targets: Vec<Address>,
        /// Revoke instead of grant.
        #[arg(long)]
        revoke: bool,
    },

    /// Show the allowlist status of an address.
    Status {
        /// Address to check.
        #[arg(long)]
        target: Address,
    },

    /// Transfer ledger ownership (owner only).
    TransferOwnership {
        /// Calling address; must be the current owner.
        #[arg(long)]
        caller: Address,
        /// The new owner. The zero address is rejected.
        #[arg(long)]
        new_owner: Address,
    },
}

/// Execute the access subcommand.
pub fn run_access(args: &AccessArgs, ledger_path: &Path) -> Result<u8> {
    let mut ledger = state::load(ledger_path)?;

    match &args.command {
        AccessCommand::Allow {
            caller,
            target,
            revoke,
        } => {
            ledger.set_allowed(caller, *target, !revoke)?;
            state::save(ledger_path, &ledger)?;
            let verb = if *revoke { "revoked" } else { "granted" };
            println!("OK: {verb} allowlist entry for {target}");
        }
        AccessCommand::BatchAllow {
            caller,
            targets,
            revoke,
        } => {
            ledger.batch_set_allowed(caller, targets, !revoke)?;
            state::save(ledger_path, &ledger)?;
            let verb = if *revoke { "revoked" } else { "granted" };
            println!("OK: {verb} allowlist entries for {} addresses", targets.len());
        }
        AccessCommand::Status { target } => {
            let allowed = ledger.is_allowed(target);
            println!("{target}: {}", if allowed { "allowed" } else { "not allowed" });
        }
        AccessCommand::TransferOwnership { caller, new_owner } => {
            ledger.transfer_ownership(caller, *new_owner)?;
            state::save(ledger_path, &ledger)?;
            println!("OK: ownership transferred to {new_owner}");
        }
    }
    Ok(0)
}
