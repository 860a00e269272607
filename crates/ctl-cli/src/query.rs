//! # Query Subcommand
//!
//! Read operations: balance, total supply, and instance info. Reads return
//! ciphertext handles by default; `--reveal` requests local decryption from
//! the state file's backend, standing in for the out-of-band decryption a
//! deployment would route through the account holder's own capability.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use ctl_core::Address;

use crate::state::{self, CliLedger};

/// Arguments for the `ctl query` subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

/// Query subcommands.
#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Show an account's encrypted balance.
    Balance {
        /// Account address.
        #[arg(long)]
        address: Address,
        /// Decrypt locally and print the plaintext amount.
        #[arg(long)]
        reveal: bool,
    },

    /// Show the encrypted total supply.
    Supply {
        /// Decrypt locally and print the plaintext amount.
        #[arg(long)]
        reveal: bool,
    },

    /// Show ledger identity, token metadata, and ownership.
    Info,
}

/// Execute the query subcommand.
pub fn run_query(args: &QueryArgs, ledger_path: &Path) -> Result<u8> {
    let ledger = state::load(ledger_path)?;

    match &args.command {
        QueryCommand::Balance { address, reveal } => {
            let ciphertext = ledger.balance_of(address);
            println!("Account: {address}");
            println!("  Touched: {}", ledger.has_balance(address));
            println!("  Balance handle: {ciphertext}");
            if *reveal {
                print_revealed(&ledger, ledger.algebra().reveal(&ciphertext));
            }
        }
        QueryCommand::Supply { reveal } => {
            let ciphertext = ledger.total_supply();
            println!("Total supply handle: {ciphertext}");
            if *reveal {
                print_revealed(&ledger, ledger.algebra().reveal(&ciphertext));
            }
        }
        QueryCommand::Info => {
            println!("Ledger: {}", ledger.id());
            let meta = ledger.metadata();
            println!("  Token: {} ({})", meta.name, meta.symbol);
            println!("  Decimals: {}", meta.decimals);
            println!("  Owner: {}", ledger.owner());
        }
    }
    Ok(0)
}

fn print_revealed(ledger: &CliLedger, value: Option<u64>) {
    match value {
        Some(value) => {
            let decimals = ledger.metadata().decimals;
            println!(
                "  Amount: {value} base units ({} {})",
                format_units(value, decimals),
                ledger.metadata().symbol
            );
        }
        None => println!("  Amount: <not decryptable with this backend>"),
    }
}

/// Render a base-unit amount as a decimal token quantity.
fn format_units(value: u64, decimals: u8) -> String {
    let scale = 10u64.checked_pow(decimals as u32);
    match scale {
        Some(scale) if scale > 1 => {
            let whole = value / scale;
            let frac = value % scale;
            format!("{whole}.{frac:0width$}", width = decimals as usize)
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{run_init, InitArgs};

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(100_000_000, 6), "100.000000");
        assert_eq!(format_units(1_500_000, 6), "1.500000");
        assert_eq!(format_units(42, 6), "0.000042");
        assert_eq!(format_units(42, 0), "42");
    }

    #[test]
    fn test_query_runs_against_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        run_init(
            &InitArgs {
                owner: addr(1),
                name: "Confidential USD".to_string(),
                symbol: "cUSD".to_string(),
                decimals: 6,
            },
            &path,
        )
        .unwrap();

        let args = QueryArgs {
            command: QueryCommand::Balance {
                address: addr(2),
                reveal: true,
            },
        };
        assert_eq!(run_query(&args, &path).unwrap(), 0);

        let args = QueryArgs {
            command: QueryCommand::Info,
        };
        assert_eq!(run_query(&args, &path).unwrap(), 0);
    }
}
