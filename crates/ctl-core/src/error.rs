//! # Error Types — Address Parsing Failures
//!
//! Errors produced while constructing foundational types. Ledger operation
//! errors live in `ctl-ledger`; this crate only reports malformed inputs to
//! its own constructors. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Error parsing an [`Address`](crate::Address) from its textual form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The hex body has the wrong length (40 hex characters expected).
    #[error("address hex must be 40 chars, got {0}")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]` appeared in the hex body.
    #[error("invalid hex at position {position}")]
    InvalidHex {
        /// Byte offset of the offending character within the hex body.
        position: usize,
    },
}
