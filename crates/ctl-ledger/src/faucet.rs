//! # Faucet Controller — Rate-Limited Onboarding Credits
//!
//! A fixed-amount, cooldown-gated token dispenser. Claim amounts are
//! plaintext fixed by the faucet schedule, so claims need no input proof;
//! they flow through the same credit path as minting. First-time claimants
//! are auto-enrolled into the allowlist by the ledger.
//!
//! Claim records are created on demand and never deleted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ctl_core::{Address, UnixSeconds};

use crate::error::LedgerError;

/// Default claim amount: 100 whole tokens in micro-units.
pub const DEFAULT_FAUCET_AMOUNT: u64 = 100_000_000;

/// Default claim cooldown: 24 hours.
pub const DEFAULT_FAUCET_COOLDOWN_SECS: u64 = 86_400;

/// Faucet settings and per-address claim history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faucet {
    amount: u64,
    cooldown_secs: u64,
    last_claim: BTreeMap<Address, UnixSeconds>,
}

impl Faucet {
    /// Create a faucet with the given settings.
    pub fn new(amount: u64, cooldown_secs: u64) -> Self {
        Self {
            amount,
            cooldown_secs,
            last_claim: BTreeMap::new(),
        }
    }

    /// The amount credited per claim.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// The cooldown between claims, in seconds.
    pub fn cooldown_secs(&self) -> u64 {
        self.cooldown_secs
    }

    /// When `address` last claimed, or 0 for never.
    pub fn last_claim(&self, address: &Address) -> UnixSeconds {
        self.last_claim.get(address).copied().unwrap_or(0)
    }

    /// Seconds until `address` may claim again. Zero when a claim would be
    /// accepted now, including for addresses that never claimed.
    pub fn time_until_next_claim(&self, address: &Address, now: UnixSeconds) -> u64 {
        match self.last_claim.get(address) {
            Some(last) => last
                .saturating_add(self.cooldown_secs)
                .saturating_sub(now),
            None => 0,
        }
    }

    /// Validate that `caller` is past its cooldown.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::CooldownActive`] with the remaining wait.
    pub(crate) fn authorize_claim(
        &self,
        caller: &Address,
        now: UnixSeconds,
    ) -> Result<(), LedgerError> {
        let remaining = self.time_until_next_claim(caller, now);
        if remaining > 0 {
            return Err(LedgerError::CooldownActive {
                remaining_secs: remaining,
            });
        }
        Ok(())
    }

    /// Record a successful claim at `now`.
    pub(crate) fn record_claim(&mut self, caller: Address, now: UnixSeconds) {
        self.last_claim.insert(caller, now);
    }

    /// Replace both settings atomically.
    pub(crate) fn set_settings(&mut self, amount: u64, cooldown_secs: u64) {
        self.amount = amount;
        self.cooldown_secs = cooldown_secs;
    }
}

impl Default for Faucet {
    fn default() -> Self {
        Self::new(DEFAULT_FAUCET_AMOUNT, DEFAULT_FAUCET_COOLDOWN_SECS)
    }
}
