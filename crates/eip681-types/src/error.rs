//! Error taxonomy for payment request encoding and validation.
//!
//! Every fallible operation in this crate surfaces one of the variants below.
//! Callers pattern-match on the variant to distinguish, say, a malformed
//! address from a malformed amount; the structured fields carry the offending
//! value so the error can be reported without re-deriving context.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the codec core.
#[derive(Debug, Error)]
pub enum Error {
    /// The value is not `0x` followed by exactly 40 hex digits.
    #[error("invalid address: {value}")]
    InvalidAddress {
        /// The offending input, verbatim.
        value: String,
    },

    /// The amount is negative, not a decimal number, or out of range.
    #[error("invalid amount {value}: {reason}")]
    InvalidAmount {
        /// The offending input, verbatim.
        value: String,
        /// What exactly was wrong with it.
        reason: String,
    },

    /// The network name is not in the registry of known networks.
    #[error("unknown network: {0}")]
    InvalidNetwork(String),

    /// The token precision is outside the supported range.
    #[error("invalid decimals {value}: must be at most {max}")]
    InvalidPrecision {
        /// The requested precision.
        value: u8,
        /// The bound it violated.
        max: u8,
    },

    /// Aggregate of every blocking defect found in one validation pass.
    #[error("validation failed: {}", .errors.join("; "))]
    ValidationFailed {
        /// All blocking messages, in the order they were found.
        errors: Vec<String>,
    },

    /// The identifier string is structurally malformed, or encoding hit an
    /// unexpected internal failure.
    #[error("cannot process payment request {input}: {reason}")]
    EncodingFailed {
        /// The identifier (or candidate identifier) being processed.
        input: String,
        /// Human-readable cause.
        reason: String,
    },

    /// Reserved for checksum-engine failures that are not format errors.
    #[error("checksum computation failed: {0}")]
    ChecksumFailed(String),
}
