//! # The Ciphertext Algebra Contract
//!
//! The narrow interface the ledger core computes against. Isolating the
//! algebra behind this trait lets the transfer and burn algorithms be
//! written once, with no knowledge of the underlying scheme, and lets a
//! plaintext backend stand in for a real FHE coprocessor under test.

use ctl_core::{Address, LedgerId};

use crate::handle::{Enc64, EncBool};
use crate::proof::InputProof;

/// Homomorphic operations over encrypted 64-bit unsigned integers.
///
/// Arithmetic follows native unsigned wraparound semantics: the scheme does
/// not protect against overflow, and callers must bound amounts upstream.
/// Every operation mints a fresh ciphertext for its result; none reveals
/// anything about operand magnitude to an observer without a decryption
/// capability.
pub trait CiphertextAlgebra {
    /// A fresh encryption of zero, used for account initialization and as
    /// the collapsed amount of an uncovered transfer.
    fn encrypt_zero(&self) -> Enc64;

    /// Encrypt a plaintext amount already known to the ledger (mint, burn,
    /// and faucet amounts). Not for caller-supplied values, which must
    /// arrive as proven ciphertext.
    fn trivial_encrypt(&self, value: u64) -> Enc64;

    /// Homomorphic wrapping addition.
    fn add(&self, a: &Enc64, b: &Enc64) -> Enc64;

    /// Homomorphic wrapping subtraction.
    fn sub(&self, a: &Enc64, b: &Enc64) -> Enc64;

    /// Homomorphic `a >= b`, as an encrypted boolean.
    fn ge(&self, a: &Enc64, b: &Enc64) -> EncBool;

    /// Homomorphic conditional: `if_true` where `cond` holds, else
    /// `if_false`. The evaluation path is identical for both outcomes.
    fn select(&self, cond: &EncBool, if_true: &Enc64, if_false: &Enc64) -> Enc64;

    /// Check that `proof` binds `ciphertext` to this ledger and sender.
    ///
    /// Fails closed: any mismatch, unknown handle, or malformed proof
    /// yields `false`. Never panics. Surfacing an error is the caller's
    /// responsibility.
    fn verify_proof(
        &self,
        ciphertext: &Enc64,
        proof: &InputProof,
        ledger: &LedgerId,
        sender: &Address,
    ) -> bool;
}
