//! # ctl-algebra — Ciphertext Algebra
//!
//! The homomorphic-encryption oracle the ledger core computes with. Encrypted
//! 64-bit integers are opaque [`Enc64`] handles supporting add, subtract,
//! greater-or-equal, and conditional select; encrypted booleans are
//! [`EncBool`] handles produced by comparisons and consumed by selects.
//! Caller-supplied ciphertext is authenticated by an [`InputProof`] bound to
//! one ledger instance and one submitting address.
//!
//! ## Key Design Principles
//!
//! 1. **The scheme is opaque.** Nothing outside a backend can read, compare,
//!    or branch on ciphertext content. The ledger core is written once
//!    against the [`CiphertextAlgebra`] trait and works unchanged over any
//!    backend.
//!
//! 2. **Proof verification fails closed.** [`CiphertextAlgebra::verify_proof`]
//!    returns `false` on any mismatch or malformed input and never panics;
//!    surfacing an error is the caller's job.
//!
//! 3. **Decryption is out of core.** Backends may offer a local decryption
//!    capability ([`ClearAlgebra::reveal`]) for tests and demos, but no
//!    ledger operation ever decrypts: reads return ciphertext to whoever
//!    holds the corresponding capability.
//!
//! ## Backends
//!
//! [`ClearAlgebra`] is the reference backend: plaintext values behind the
//! same opaque handle interface, with Ed25519-signed input proofs and
//! branch-free comparison/select evaluation. A production FHE backend plugs
//! in behind the same trait.

pub mod algebra;
pub mod clear;
pub mod error;
pub mod handle;
pub mod proof;

// Re-export primary types for ergonomic imports.
pub use algebra::CiphertextAlgebra;
pub use clear::ClearAlgebra;
pub use error::AlgebraError;
pub use handle::{CipherHandle, Enc64, EncBool};
pub use proof::InputProof;
