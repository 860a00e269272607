//! # Account Addresses
//!
//! Defines `Address`, the opaque 20-byte identifier under which all
//! per-account ledger state is keyed.
//!
//! ## Security Invariant
//!
//! Addresses are plaintext data: they key encrypted balances but reveal
//! nothing about them, so they may appear in logs and error messages.
//! The zero address is reserved as "no account" and is rejected wherever an
//! operation requires a real counterparty (ownership transfer in
//! particular).
//!
//! ## Serde
//!
//! Addresses serialize/deserialize as lowercase `0x`-prefixed hex strings
//! for JSON interoperability with the wallet-facing layers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;

/// An opaque 20-byte account identifier.
///
/// Serializes as a lowercase `0x`-prefixed hex string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The reserved all-zero address ("no account").
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create an address from raw 20 bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Return the raw 20-byte identifier.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the reserved zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Render the address as a lowercase `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        let body: String = self.0.iter().map(|b| format!("{b:02x}")).collect();
        format!("0x{body}")
    }

    /// Parse an address from a hex string, with or without `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex body is not exactly 40 characters or
    /// contains non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, AddressError> {
        let body = hex.trim().strip_prefix("0x").unwrap_or(hex.trim());
        if body.len() != 40 {
            return Err(AddressError::InvalidLength(body.len()));
        }
        let mut bytes = [0u8; 20];
        for (i, chunk) in body.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| AddressError::InvalidHex { position: i * 2 })?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| AddressError::InvalidHex { position: i * 2 })?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Address(0x{prefix}...)")
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
