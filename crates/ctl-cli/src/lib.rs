//! # ctl-cli — Confidential Token Ledger CLI
//!
//! Drives a `ClearAlgebra`-backed ledger persisted as a local JSON state
//! file. The CLI plays every out-of-core role the ledger leaves to its
//! environment: it supplies caller identities, encrypts transfer amounts
//! and produces their input proofs, and requests local decryption for
//! `--reveal` reads.
//!
//! ## Subcommands
//!
//! - `init` — Create a new ledger state file.
//! - `token` — Mint, burn, and confidential transfer.
//! - `access` — Allowlist management and ownership transfer.
//! - `faucet` — Claim, status, and owner configuration.
//! - `query` — Balance, supply, and instance info reads.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `ctl-ledger`; no ledger semantics here.
//! - The state file is rewritten via a temp-file rename, never in place.

pub mod access;
pub mod faucet;
pub mod init;
pub mod query;
pub mod state;
pub mod token;
