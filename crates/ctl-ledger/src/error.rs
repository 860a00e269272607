//! # Error Types — Rejected Ledger Transitions
//!
//! Every failure is a rejected transition with unchanged state: no operation
//! is fatal to the ledger, none is retried internally, and none commits
//! partially. The one intentional non-error is balance insufficiency during
//! transfer and burn, which applies a zero amount and reports success.

use thiserror::Error;

use ctl_core::Address;

/// A rejected ledger operation.
#[derive(Error, Debug, Clone)]
pub enum LedgerError {
    /// A non-owner attempted an owner-only operation, or a party to a
    /// transfer is not allowlisted.
    #[error("unauthorized: {caller} may not {operation}")]
    Unauthorized {
        /// The address that attempted the operation.
        caller: Address,
        /// The operation that was refused.
        operation: &'static str,
    },

    /// The input proof does not bind the ciphertext to this ledger instance
    /// and the submitting address.
    #[error("input proof does not bind the ciphertext to this ledger for {sender}")]
    InvalidProof {
        /// The address that submitted the ciphertext.
        sender: Address,
    },

    /// A malformed argument, such as the zero address where a real
    /// counterparty is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The faucet cooldown for this address has not elapsed.
    #[error("faucet cooldown active: {remaining_secs}s until next claim")]
    CooldownActive {
        /// Seconds remaining until the next claim is accepted.
        remaining_secs: u64,
    },
}
