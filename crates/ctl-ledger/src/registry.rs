//! # Access Control Registry
//!
//! Owner identity and the allowlist of addresses permitted to hold and move
//! funds. Allowlist membership gates transfers only; mint and burn are
//! owner-privileged and bypass it.
//!
//! ## Security Invariant
//!
//! Owner checks and allowlist reads operate on plaintext addresses and leak
//! no encrypted data; they run before any ciphertext work, and their
//! failures are observable. Batch updates validate before the first write,
//! so a rejected batch leaves the registry untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ctl_core::Address;

use crate::error::LedgerError;

/// Owner identity plus the allowlist for one ledger instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRegistry {
    owner: Address,
    allowed: BTreeMap<Address, bool>,
}

impl AccessRegistry {
    /// Create a registry with the given owner and an empty allowlist.
    ///
    /// Owner validity (non-zero) is enforced by the ledger constructor.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            allowed: BTreeMap::new(),
        }
    }

    /// The current owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Whether `caller` is the current owner.
    pub fn is_owner(&self, caller: &Address) -> bool {
        *caller == self.owner
    }

    /// Whether `target` is allowlisted. Addresses never set default to
    /// not-allowed.
    pub fn is_allowed(&self, target: &Address) -> bool {
        self.allowed.get(target).copied().unwrap_or(false)
    }

    /// Set the allowlist entry for one address. Owner-only. Idempotent:
    /// re-applying the current value changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] unless `caller` is the owner.
    pub fn set_allowed(
        &mut self,
        caller: &Address,
        target: Address,
        allowed: bool,
    ) -> Result<(), LedgerError> {
        self.require_owner(caller, "update the allowlist")?;
        self.allowed.insert(target, allowed);
        Ok(())
    }

    /// Set the allowlist entry for a batch of addresses as a single state
    /// transition: either every entry updates or none does.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] unless `caller` is the owner,
    /// in which case no entry has been written.
    pub fn batch_set_allowed(
        &mut self,
        caller: &Address,
        targets: &[Address],
        allowed: bool,
    ) -> Result<(), LedgerError> {
        // Authorization is the only failure mode; checking it before the
        // first insert makes the batch all-or-nothing.
        self.require_owner(caller, "update the allowlist")?;
        for target in targets {
            self.allowed.insert(*target, allowed);
        }
        Ok(())
    }

    /// Transfer ownership to `new_owner` in a single step.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] unless `caller` is the owner,
    /// and [`LedgerError::InvalidArgument`] if `new_owner` is the zero
    /// address.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<(), LedgerError> {
        self.require_owner(caller, "transfer ownership")?;
        if new_owner.is_zero() {
            return Err(LedgerError::InvalidArgument(
                "ownership cannot be transferred to the zero address".to_string(),
            ));
        }
        self.owner = new_owner;
        Ok(())
    }

    /// Allowlist an address without an authorization check. Reserved for
    /// faucet auto-enrollment, which the ledger invokes on behalf of
    /// first-time claimants.
    pub(crate) fn enroll(&mut self, target: Address) {
        self.allowed.insert(target, true);
    }

    /// Validate that `caller` is the owner.
    fn require_owner(
        &self,
        caller: &Address,
        operation: &'static str,
    ) -> Result<(), LedgerError> {
        if !self.is_owner(caller) {
            return Err(LedgerError::Unauthorized {
                caller: *caller,
                operation,
            });
        }
        Ok(())
    }
}
