//! Traced AES-128 implementation for step-by-step visualization.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128, returning every intermediate value of the
//!   expansion (temp word, post-RotWord, post-SubWord, Rcon, post-Rcon).
//! - Single-block encryption, returning the state at every checkpoint of
//!   every round.
//! - Public trace types shared with presentation layers.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened. Only the forward cipher is provided.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;
mod trace;

pub use crate::block::{state_row, Block};
pub use crate::cipher::encrypt_block;
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys};
pub use crate::schedule::expand_key;
pub use crate::trace::{EncryptionResult, ExpansionResult, ExpansionStep, RoundStep};
