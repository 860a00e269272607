//! # Ciphertext Handles
//!
//! Opaque identifiers for encrypted values. A handle names a ciphertext held
//! by the backend; it carries no information about the plaintext, and two
//! handles are never compared for trust purposes — equality of handles only
//! means "the same ciphertext object", never "the same value".
//!
//! ## Security Invariant
//!
//! Every algebra operation that produces a result mints a *fresh* handle,
//! including operations whose result happens to equal an operand (a
//! conditional select that falls through, a subtraction of zero). An
//! observer of handle traffic therefore cannot distinguish a no-op from a
//! real mutation.
//!
//! ## Serde
//!
//! Handles serialize/deserialize as lowercase hex strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{bytes_to_hex, hex_to_bytes, AlgebraError};

/// An opaque 32-byte ciphertext handle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CipherHandle(pub [u8; 32]);

impl CipherHandle {
    /// Create a handle from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte handle.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the handle as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse a handle from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, AlgebraError> {
        let hex = hex.trim();
        if hex.len() != 64 {
            return Err(AlgebraError::InvalidLength {
                what: "ciphertext handle",
                expected: 64,
                got: hex.len(),
            });
        }
        let bytes = hex_to_bytes(hex)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for CipherHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CipherHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for CipherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = bytes_to_hex(&self.0[..4]);
        write!(f, "CipherHandle({prefix}...)")
    }
}

impl std::fmt::Display for CipherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An encrypted unsigned 64-bit integer.
///
/// Deliberately does not implement `PartialEq`: ciphertext must never be
/// compared by content. Use [`CiphertextAlgebra::ge`](crate::CiphertextAlgebra::ge)
/// for ordering under encryption, or a backend decryption capability in
/// tests.
#[derive(Clone, Serialize, Deserialize)]
pub struct Enc64 {
    handle: CipherHandle,
}

impl Enc64 {
    /// Wrap a backend-issued handle as an encrypted integer.
    pub fn from_handle(handle: CipherHandle) -> Self {
        Self { handle }
    }

    /// The opaque handle naming this ciphertext.
    pub fn handle(&self) -> &CipherHandle {
        &self.handle
    }
}

impl std::fmt::Debug for Enc64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enc64({:?})", self.handle)
    }
}

impl std::fmt::Display for Enc64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.handle.to_hex())
    }
}

/// An encrypted boolean, produced by comparisons and consumed by selects.
#[derive(Clone, Serialize, Deserialize)]
pub struct EncBool {
    handle: CipherHandle,
}

impl EncBool {
    /// Wrap a backend-issued handle as an encrypted boolean.
    pub fn from_handle(handle: CipherHandle) -> Self {
        Self { handle }
    }

    /// The opaque handle naming this ciphertext.
    pub fn handle(&self) -> &CipherHandle {
        &self.handle
    }
}

impl std::fmt::Debug for EncBool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EncBool({:?})", self.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(byte: u8) -> CipherHandle {
        CipherHandle::from_bytes([byte; 32])
    }

    #[test]
    fn test_handle_hex_roundtrip() {
        let h = handle(0xe7);
        let hex = h.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(CipherHandle::from_hex(&hex).unwrap(), h);
    }

    #[test]
    fn test_handle_from_hex_rejects_bad_input() {
        assert!(matches!(
            CipherHandle::from_hex("abcd"),
            Err(AlgebraError::InvalidLength { got: 4, .. })
        ));
        assert!(matches!(
            CipherHandle::from_hex(&"zz".repeat(32)),
            Err(AlgebraError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_debug_shows_prefix_only() {
        let debug = format!("{:?}", handle(0x10));
        assert_eq!(debug, "CipherHandle(10101010...)");
    }

    #[test]
    fn test_enc64_serde_roundtrip() {
        let ct = Enc64::from_handle(handle(0x33));
        let json = serde_json::to_string(&ct).unwrap();
        let parsed: Enc64 = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.handle(), ct.handle());
    }
}
