//! # Ledger Facade — One Instance, One State Machine
//!
//! Composes the access registry, account book, faucet, and a ciphertext
//! algebra backend into a single ledger instance. This is the complete call
//! surface of the core; it is transport-agnostic and can sit behind an RPC
//! handler, a contract entry point, or a local embedding unchanged.
//!
//! ## Concurrency
//!
//! Mutations take `&mut self` and run to completion: Rust's aliasing rules
//! give strict serialization for a single instance without internal locks,
//! and no operation can observe a partially applied effect of another.
//! Reads take `&self` against committed state. Embedders that share an
//! instance across threads wrap it in their own lock.

use serde::{Deserialize, Serialize};

use ctl_algebra::{CiphertextAlgebra, Enc64, InputProof};
use ctl_core::{Address, LedgerId, UnixSeconds};

use crate::accounts::AccountBook;
use crate::error::LedgerError;
use crate::faucet::Faucet;
use crate::registry::AccessRegistry;
use crate::transfer;

/// Display metadata for the token, fixed at initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal places; amounts are integer multiples of 10^-decimals.
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "Confidential USD".to_string(),
            symbol: "cUSD".to_string(),
            decimals: 6,
        }
    }
}

/// A confidential token ledger instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger<A: CiphertextAlgebra> {
    id: LedgerId,
    metadata: TokenMetadata,
    registry: AccessRegistry,
    book: AccountBook,
    faucet: Faucet,
    algebra: A,
}

impl<A: CiphertextAlgebra> Ledger<A> {
    /// Initialize a ledger: owner, identity, metadata, default faucet
    /// settings, and an encrypted-zero total supply, in one step.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidArgument`] if `owner` is the zero
    /// address.
    pub fn new(
        id: LedgerId,
        owner: Address,
        metadata: TokenMetadata,
        algebra: A,
    ) -> Result<Self, LedgerError> {
        if owner.is_zero() {
            return Err(LedgerError::InvalidArgument(
                "the zero address cannot own a ledger".to_string(),
            ));
        }
        let book = AccountBook::new(&algebra);
        tracing::info!(ledger = %id, owner = %owner, "ledger initialized");
        Ok(Self {
            id,
            metadata,
            registry: AccessRegistry::new(owner),
            book,
            faucet: Faucet::default(),
            algebra,
        })
    }

    // ── Identity and metadata ──────────────────────────────────────────

    /// The ledger instance identifier input proofs are bound to.
    pub fn id(&self) -> &LedgerId {
        &self.id
    }

    /// Token display metadata.
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// The algebra backend. Exposed so embedders can play the out-of-core
    /// collaborator roles (ciphertext production, decryption requests).
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    // ── Access control ─────────────────────────────────────────────────

    /// The current owner.
    pub fn owner(&self) -> Address {
        self.registry.owner()
    }

    /// Whether `caller` is the current owner.
    pub fn is_owner(&self, caller: &Address) -> bool {
        self.registry.is_owner(caller)
    }

    /// Whether `target` may send and receive transfers.
    pub fn is_allowed(&self, target: &Address) -> bool {
        self.registry.is_allowed(target)
    }

    /// Set the allowlist entry for one address. Owner-only, idempotent.
    pub fn set_allowed(
        &mut self,
        caller: &Address,
        target: Address,
        allowed: bool,
    ) -> Result<(), LedgerError> {
        self.registry.set_allowed(caller, target, allowed)?;
        tracing::info!(account = %target, allowed, "allowlist updated");
        Ok(())
    }

    /// Set the allowlist entry for a batch of addresses, all-or-nothing.
    /// Owner-only.
    pub fn batch_set_allowed(
        &mut self,
        caller: &Address,
        targets: &[Address],
        allowed: bool,
    ) -> Result<(), LedgerError> {
        self.registry.batch_set_allowed(caller, targets, allowed)?;
        tracing::info!(count = targets.len(), allowed, "allowlist batch updated");
        Ok(())
    }

    /// Transfer ownership to `new_owner`. Owner-only; the zero address is
    /// rejected.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<(), LedgerError> {
        self.registry.transfer_ownership(caller, new_owner)?;
        tracing::info!(new_owner = %new_owner, "ownership transferred");
        Ok(())
    }

    // ── Supply operations ──────────────────────────────────────────────

    /// Mint `amount` to `to`. Owner-only; bypasses the allowlist. The
    /// recipient account is created on first credit.
    pub fn mint(
        &mut self,
        caller: &Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        if !self.registry.is_owner(caller) {
            return Err(LedgerError::Unauthorized {
                caller: *caller,
                operation: "mint",
            });
        }
        let amount = self.algebra.trivial_encrypt(amount);
        self.book.credit(&self.algebra, to, &amount);
        tracing::info!(to = %to, "mint applied");
        Ok(())
    }

    /// Burn up to `amount` from `from`. Owner-only; bypasses the allowlist.
    /// If the balance cannot cover the amount the burn collapses to zero
    /// over the identical code path — never an error, and the supply moves
    /// by exactly what the balance moved.
    pub fn burn(
        &mut self,
        caller: &Address,
        from: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        if !self.registry.is_owner(caller) {
            return Err(LedgerError::Unauthorized {
                caller: *caller,
                operation: "burn",
            });
        }
        let amount = self.algebra.trivial_encrypt(amount);
        self.book.burn_conditional(&self.algebra, from, &amount);
        tracing::info!(from = %from, "burn applied");
        Ok(())
    }

    /// Confidentially transfer `amount` from `caller` to `to`. Both parties
    /// must be allowlisted and the proof must bind `amount` to this ledger
    /// and `caller`. Success does not disclose whether value moved.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: &Enc64,
        proof: &InputProof,
    ) -> Result<(), LedgerError> {
        transfer::execute(
            &self.registry,
            &mut self.book,
            &self.algebra,
            &self.id,
            caller,
            to,
            amount,
            proof,
        )
    }

    // ── Reads ──────────────────────────────────────────────────────────

    /// The encrypted balance of `address`. Uninitialized accounts read as a
    /// fresh encryption of zero.
    pub fn balance_of(&self, address: &Address) -> Enc64 {
        self.book.balance_of(&self.algebra, address)
    }

    /// Whether `address` has ever held a balance record.
    pub fn has_balance(&self, address: &Address) -> bool {
        self.book.is_initialized(address)
    }

    /// The encrypted total supply.
    pub fn total_supply(&self) -> Enc64 {
        self.book.total_supply()
    }

    // ── Faucet ─────────────────────────────────────────────────────────

    /// Claim the faucet amount for `caller` at time `now`. First-time
    /// claimants are auto-enrolled into the allowlist.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::CooldownActive`] until the cooldown elapses.
    pub fn claim_faucet(
        &mut self,
        caller: Address,
        now: UnixSeconds,
    ) -> Result<(), LedgerError> {
        self.faucet.authorize_claim(&caller, now)?;
        if !self.registry.is_allowed(&caller) {
            self.registry.enroll(caller);
            tracing::info!(claimant = %caller, "faucet auto-enrolled claimant");
        }
        let amount = self.algebra.trivial_encrypt(self.faucet.amount());
        self.book.credit(&self.algebra, caller, &amount);
        self.faucet.record_claim(caller, now);
        tracing::info!(claimant = %caller, "faucet claim applied");
        Ok(())
    }

    /// Replace the faucet amount and cooldown atomically. Owner-only.
    pub fn set_faucet_settings(
        &mut self,
        caller: &Address,
        amount: u64,
        cooldown_secs: u64,
    ) -> Result<(), LedgerError> {
        if !self.registry.is_owner(caller) {
            return Err(LedgerError::Unauthorized {
                caller: *caller,
                operation: "configure the faucet",
            });
        }
        self.faucet.set_settings(amount, cooldown_secs);
        tracing::info!(cooldown_secs, "faucet settings updated");
        Ok(())
    }

    /// The amount credited per faucet claim.
    pub fn faucet_amount(&self) -> u64 {
        self.faucet.amount()
    }

    /// The faucet cooldown in seconds.
    pub fn faucet_cooldown(&self) -> u64 {
        self.faucet.cooldown_secs()
    }

    /// When `address` last claimed, or 0 for never.
    pub fn last_faucet_claim(&self, address: &Address) -> UnixSeconds {
        self.faucet.last_claim(address)
    }

    /// Seconds until `address` may claim again, relative to `now`.
    pub fn time_until_next_claim(&self, address: &Address, now: UnixSeconds) -> u64 {
        self.faucet.time_until_next_claim(address, now)
    }
}
