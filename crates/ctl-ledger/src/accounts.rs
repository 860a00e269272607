//! # Account Book — Encrypted Balances and Supply
//!
//! Maps addresses to encrypted balances and maintains the encrypted total
//! supply. Account records are created lazily on first credit and never
//! deleted; the `initialized` flag distinguishes "never touched" from
//! "touched, currently zero", because ciphertext equality to encrypted zero
//! cannot be tested cheaply or privately.
//!
//! ## Security Invariant
//!
//! The total supply always equals the homomorphic sum of all balances. It is
//! maintained incrementally — the conditional amount a burn applies to a
//! balance is computed once and the same ciphertext is applied to the
//! supply, so the two can never diverge even when the burn collapses to
//! zero.
//!
//! Authorization lives at the ledger surface; this module holds mechanics
//! only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ctl_algebra::{CiphertextAlgebra, Enc64};
use ctl_core::Address;

/// One account: encrypted balance plus the initialization marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    balance: Enc64,
    initialized: bool,
}

/// The per-address balance table and the encrypted total supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBook {
    accounts: BTreeMap<Address, AccountRecord>,
    total_supply: Enc64,
}

impl AccountBook {
    /// Create an empty book with an encrypted-zero total supply.
    pub fn new(algebra: &impl CiphertextAlgebra) -> Self {
        Self {
            accounts: BTreeMap::new(),
            total_supply: algebra.encrypt_zero(),
        }
    }

    /// Create the account record for `address` if it does not exist, with
    /// an encrypted-zero balance. Idempotent and side-effect-free when the
    /// record already exists.
    pub fn ensure_initialized(&mut self, algebra: &impl CiphertextAlgebra, address: Address) {
        if !self.accounts.contains_key(&address) {
            self.accounts.insert(
                address,
                AccountRecord {
                    balance: algebra.encrypt_zero(),
                    initialized: true,
                },
            );
            tracing::debug!(account = %address, "account record created");
        }
    }

    /// Whether `address` has ever been credited. A plaintext-safe read: it
    /// reveals that an account was touched, never what it holds.
    pub fn is_initialized(&self, address: &Address) -> bool {
        self.accounts
            .get(address)
            .map(|record| record.initialized)
            .unwrap_or(false)
    }

    /// The encrypted balance of `address`. Uninitialized accounts read as a
    /// fresh encryption of zero, never as a sentinel plaintext value.
    pub fn balance_of(&self, algebra: &impl CiphertextAlgebra, address: &Address) -> Enc64 {
        match self.accounts.get(address) {
            Some(record) => record.balance.clone(),
            None => algebra.encrypt_zero(),
        }
    }

    /// The encrypted total supply.
    pub fn total_supply(&self) -> Enc64 {
        self.total_supply.clone()
    }

    /// Credit `amount` to `to` and add it to the total supply. Used by mint
    /// and faucet claims, where the amount is a trusted plaintext encrypted
    /// by the ledger itself.
    pub(crate) fn credit(
        &mut self,
        algebra: &impl CiphertextAlgebra,
        to: Address,
        amount: &Enc64,
    ) {
        self.ensure_initialized(algebra, to);
        // The record exists after ensure_initialized; the lookup cannot miss.
        if let Some(record) = self.accounts.get_mut(&to) {
            record.balance = algebra.add(&record.balance, amount);
        }
        self.total_supply = algebra.add(&self.total_supply, amount);
    }

    /// Debit up to `amount` from `from`, removing the same amount from the
    /// total supply. If the balance cannot cover the amount, the applied
    /// amount collapses to an encryption of zero over the identical code
    /// path.
    ///
    /// The conditional amount is computed once and the resulting ciphertext
    /// is applied to both the balance and the supply.
    pub(crate) fn burn_conditional(
        &mut self,
        algebra: &impl CiphertextAlgebra,
        from: Address,
        amount: &Enc64,
    ) {
        self.ensure_initialized(algebra, from);
        let balance = self.balance_of(algebra, &from);
        let covered = algebra.ge(&balance, amount);
        let applied = algebra.select(&covered, amount, &algebra.encrypt_zero());

        if let Some(record) = self.accounts.get_mut(&from) {
            record.balance = algebra.sub(&record.balance, &applied);
        }
        self.total_supply = algebra.sub(&self.total_supply, &applied);
    }

    /// Move `amount` from `from` to `to`. Both accounts must already be
    /// initialized; the supply is untouched. The transfer engine computes
    /// `amount` conditionally before calling in.
    pub(crate) fn apply_transfer(
        &mut self,
        algebra: &impl CiphertextAlgebra,
        from: &Address,
        to: &Address,
        amount: &Enc64,
    ) {
        if let Some(record) = self.accounts.get_mut(from) {
            record.balance = algebra.sub(&record.balance, amount);
        }
        if let Some(record) = self.accounts.get_mut(to) {
            record.balance = algebra.add(&record.balance, amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctl_algebra::ClearAlgebra;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    fn reveal(algebra: &ClearAlgebra, ct: &Enc64) -> u64 {
        algebra.reveal(ct).expect("backend-issued handle")
    }

    #[test]
    fn test_new_book_has_zero_supply() {
        let algebra = ClearAlgebra::new();
        let book = AccountBook::new(&algebra);
        assert_eq!(reveal(&algebra, &book.total_supply()), 0);
    }

    #[test]
    fn test_uninitialized_balance_reads_as_encrypted_zero() {
        let algebra = ClearAlgebra::new();
        let book = AccountBook::new(&algebra);
        assert!(!book.is_initialized(&addr(1)));
        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 0);
    }

    #[test]
    fn test_ensure_initialized_is_idempotent() {
        let algebra = ClearAlgebra::new();
        let mut book = AccountBook::new(&algebra);
        book.ensure_initialized(&algebra, addr(1));
        assert!(book.is_initialized(&addr(1)));

        let amount = algebra.trivial_encrypt(50);
        book.credit(&algebra, addr(1), &amount);
        // Re-initializing must not reset the balance.
        book.ensure_initialized(&algebra, addr(1));
        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 50);
    }

    #[test]
    fn test_credit_updates_balance_and_supply() {
        let algebra = ClearAlgebra::new();
        let mut book = AccountBook::new(&algebra);
        book.credit(&algebra, addr(1), &algebra.trivial_encrypt(100));
        book.credit(&algebra, addr(2), &algebra.trivial_encrypt(30));

        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 100);
        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(2))), 30);
        assert_eq!(reveal(&algebra, &book.total_supply()), 130);
    }

    #[test]
    fn test_burn_conditional_with_sufficient_balance() {
        let algebra = ClearAlgebra::new();
        let mut book = AccountBook::new(&algebra);
        book.credit(&algebra, addr(1), &algebra.trivial_encrypt(100));
        book.burn_conditional(&algebra, addr(1), &algebra.trivial_encrypt(40));

        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 60);
        assert_eq!(reveal(&algebra, &book.total_supply()), 60);
    }

    #[test]
    fn test_burn_conditional_exact_balance() {
        let algebra = ClearAlgebra::new();
        let mut book = AccountBook::new(&algebra);
        book.credit(&algebra, addr(1), &algebra.trivial_encrypt(100));
        book.burn_conditional(&algebra, addr(1), &algebra.trivial_encrypt(100));

        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 0);
        assert_eq!(reveal(&algebra, &book.total_supply()), 0);
        assert!(book.is_initialized(&addr(1)));
    }

    #[test]
    fn test_burn_conditional_insufficient_is_a_silent_noop() {
        let algebra = ClearAlgebra::new();
        let mut book = AccountBook::new(&algebra);
        book.credit(&algebra, addr(1), &algebra.trivial_encrypt(5));
        book.burn_conditional(&algebra, addr(1), &algebra.trivial_encrypt(10));

        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 5);
        assert_eq!(reveal(&algebra, &book.total_supply()), 5);
    }

    #[test]
    fn test_burn_from_uninitialized_account() {
        let algebra = ClearAlgebra::new();
        let mut book = AccountBook::new(&algebra);
        book.credit(&algebra, addr(2), &algebra.trivial_encrypt(70));
        book.burn_conditional(&algebra, addr(1), &algebra.trivial_encrypt(10));

        assert!(book.is_initialized(&addr(1)));
        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 0);
        assert_eq!(reveal(&algebra, &book.total_supply()), 70);
    }

    #[test]
    fn test_apply_transfer_moves_value_without_touching_supply() {
        let algebra = ClearAlgebra::new();
        let mut book = AccountBook::new(&algebra);
        book.credit(&algebra, addr(1), &algebra.trivial_encrypt(100));
        book.ensure_initialized(&algebra, addr(2));

        book.apply_transfer(&algebra, &addr(1), &addr(2), &algebra.trivial_encrypt(25));
        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(1))), 75);
        assert_eq!(reveal(&algebra, &book.balance_of(&algebra, &addr(2))), 25);
        assert_eq!(reveal(&algebra, &book.total_supply()), 100);
    }
}
