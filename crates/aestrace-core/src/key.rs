//! Key types for AES-128.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::Error;

/// AES-128 key wrapper, validated to hold exactly 16 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| Error::InvalidKeyLength(value.len()))?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128: one 16-byte key per round 0..=10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Views the round keys as a slice, the form [`crate::encrypt_block`]
    /// accepts.
    #[inline]
    pub fn as_slice(&self) -> &[Block] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_rejects_wrong_lengths() {
        assert_eq!(
            Aes128Key::try_from(&[0u8; 15][..]),
            Err(Error::InvalidKeyLength(15))
        );
        assert_eq!(
            Aes128Key::try_from(&[0u8; 17][..]),
            Err(Error::InvalidKeyLength(17))
        );
        assert!(Aes128Key::try_from(&[0u8; 16][..]).is_ok());
    }
}
