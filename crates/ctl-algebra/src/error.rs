//! # Error Types — Ciphertext Encoding Failures
//!
//! Errors produced while decoding handles and proofs from their textual
//! form. Algebra *operations* never error: arithmetic is total, and proof
//! verification reports failure as `false` rather than an error.

use thiserror::Error;

/// Error decoding a ciphertext handle or input proof from hex.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The hex string has the wrong length for the target type.
    #[error("{what} hex must be {expected} chars, got {got}")]
    InvalidLength {
        /// What was being decoded ("ciphertext handle" or "input proof").
        what: &'static str,
        /// Expected hex length.
        expected: usize,
        /// Actual hex length.
        got: usize,
    },

    /// A character outside `[0-9a-fA-F]` appeared in the hex body.
    #[error("invalid hex at position {position}")]
    InvalidHex {
        /// Byte offset of the offending character.
        position: usize,
    },
}

/// Decode an even-length hex string into bytes.
pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, AlgebraError> {
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or(AlgebraError::InvalidHex { position: i })
        })
        .collect()
}

/// Render bytes as a lowercase hex string.
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
