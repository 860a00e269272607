//! # ctl-ledger — Confidential Token Ledger Core
//!
//! A token ledger whose balances and transfer amounts exist only as
//! ciphertext. Supports mint, burn, confidential transfer, encrypted supply
//! accounting, an allowlist access gate, and a rate-limited faucet, composed
//! into a single sequential state machine per ledger instance.
//!
//! ## Key Design Principles
//!
//! 1. **No plaintext balances, anywhere.** The core stores, moves, and
//!    returns [`Enc64`](ctl_algebra::Enc64) ciphertext. Decryption is an
//!    out-of-core capability held by account owners; nothing here performs
//!    or awaits it.
//!
//! 2. **Insufficient balance is not an error.** A transfer or burn that the
//!    source cannot cover collapses to a zero-amount application of the
//!    identical code path. Only allowlist and proof failures are observable;
//!    balance insufficiency never is. This is the central privacy property,
//!    not a defect.
//!
//! 3. **One instance, one struct.** All state — owner, allowlist, account
//!    book, faucet — lives in an explicit [`Ledger`] value. Mutations take
//!    `&mut self`, so Rust's aliasing rules serialize them; reads take
//!    `&self` against committed state. No globals, no internal locks.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Plaintext amounts and ciphertext contents never appear in `tracing`
//!   events; addresses and operation names do.

pub mod accounts;
pub mod error;
pub mod faucet;
pub mod ledger;
pub mod registry;
pub mod transfer;

// Re-export primary types for ergonomic imports.
pub use accounts::AccountBook;
pub use error::LedgerError;
pub use faucet::{Faucet, DEFAULT_FAUCET_AMOUNT, DEFAULT_FAUCET_COOLDOWN_SECS};
pub use ledger::{Ledger, TokenMetadata};
pub use registry::AccessRegistry;
