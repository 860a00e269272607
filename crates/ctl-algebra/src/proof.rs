//! # Input Proofs
//!
//! An [`InputProof`] attests that a ciphertext entering the ledger was
//! produced for a specific (ledger instance, submitting address) pair. Every
//! caller-supplied ciphertext must carry one; a proof minted for ledger L
//! and sender S verifies only when presented to L by S, so ciphertext cannot
//! be replayed across ledgers or between senders.
//!
//! ## Binding Message
//!
//! The signed message is the domain tag, the ledger identifier, the sender
//! address, and the ciphertext handle, in that order. Any change to any
//! component invalidates the proof.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use ctl_core::{Address, LedgerId};

use crate::error::{bytes_to_hex, hex_to_bytes, AlgebraError};
use crate::handle::CipherHandle;

/// Domain separation tag for proof-binding messages.
const BINDING_DOMAIN: &[u8] = b"ctl.input-proof.v1";

/// An attestation binding a ciphertext to one ledger and one sender.
#[derive(Clone)]
pub struct InputProof(pub [u8; 64]);

impl InputProof {
    /// Create a proof from raw 64 bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Return the raw 64-byte proof.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Render the proof as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse a proof from a 128-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, AlgebraError> {
        let hex = hex.trim();
        if hex.len() != 128 {
            return Err(AlgebraError::InvalidLength {
                what: "input proof",
                expected: 128,
                got: hex.len(),
            });
        }
        let bytes = hex_to_bytes(hex)?;
        let mut arr = [0u8; 64];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for InputProof {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for InputProof {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for InputProof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InputProof({}...)", bytes_to_hex(&self.0[..4]))
    }
}

/// Assemble the message an input proof signs.
pub(crate) fn binding_message(
    ledger: &LedgerId,
    sender: &Address,
    handle: &CipherHandle,
) -> Vec<u8> {
    let mut msg = Vec::with_capacity(BINDING_DOMAIN.len() + 16 + 20 + 32);
    msg.extend_from_slice(BINDING_DOMAIN);
    msg.extend_from_slice(ledger.as_bytes());
    msg.extend_from_slice(sender.as_bytes());
    msg.extend_from_slice(handle.as_bytes());
    msg
}
