//! Input-contract errors.

use thiserror::Error;

/// Errors raised when an input violates a length precondition.
///
/// Every variant is detected before any transformation begins; on failure no
/// partial output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The cipher key was not exactly 16 bytes.
    #[error("AES-128 key must be exactly 16 bytes, got {0}")]
    InvalidKeyLength(usize),
    /// The plaintext block was not exactly 16 bytes.
    #[error("plaintext block must be exactly 16 bytes, got {0}")]
    InvalidBlockLength(usize),
    /// The round-key slice did not hold exactly 11 round keys.
    #[error("expected 11 round keys, got {0}")]
    InvalidRoundKeyCount(usize),
}

/// Result alias for the core entry points.
pub type Result<T> = core::result::Result<T, Error>;
