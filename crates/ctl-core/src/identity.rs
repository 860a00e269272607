//! # Ledger Instance Identity
//!
//! Newtype wrapper for the identifier of one ledger instance. Input proofs
//! are bound to a `LedgerId` so ciphertext produced for one ledger cannot be
//! replayed against another.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a ledger instance.
///
/// Fixed at initialization and never changed for the life of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerId(Uuid);

impl LedgerId {
    /// Generate a new random ledger identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The 16 raw bytes of the identifier, for proof-binding messages.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for LedgerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LedgerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ledger:{}", self.0)
    }
}
