//! # ctl-core — Foundational Types for the Confidential Token Ledger
//!
//! Defines the primitives every other crate in the workspace builds on:
//! account addresses, ledger instance identity, and the clock abstraction
//! used by time-gated operations.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address` and `LedgerId`
//!    are distinct types with validated constructors. No bare strings or
//!    byte slices for identifiers.
//!
//! 2. **Time is injected, never sampled.** Operations that depend on time
//!    take whole-second values produced by a [`Clock`] implementation chosen
//!    by the embedder. The ledger core never calls the system clock itself,
//!    so time-gated behavior is fully deterministic under test.
//!
//! 3. **Addresses are identity, not keys.** An `Address` is an opaque
//!    20-byte account identifier supplied by an already-authenticated
//!    session layer. Nothing in this workspace derives addresses from key
//!    material.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ctl-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize` where they appear in persisted state.

pub mod address;
pub mod clock;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use address::Address;
pub use clock::{Clock, ManualClock, SystemClock, UnixSeconds};
pub use error::AddressError;
pub use identity::LedgerId;
