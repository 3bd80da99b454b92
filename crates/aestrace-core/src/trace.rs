//! Trace records returned by key expansion and block encryption.
//!
//! Every intermediate value the algorithms produce is captured here as plain
//! data, so a presentation layer can render the progression without
//! recomputing anything.

use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::block::Block;
use crate::key::RoundKeys;

/// One row of the key-expansion trace, for word index `i` in 4..=43.
///
/// The four transform fields are `Some` only when `i % 4 == 0`, the rows on
/// which RotWord/SubWord/Rcon apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionStep {
    /// Word index `i`.
    pub index: usize,
    /// `temp` before any transformation, i.e. `w[i-1]`.
    pub temp: u32,
    /// `temp` after RotWord.
    pub after_rot_word: Option<u32>,
    /// `temp` after SubWord.
    pub after_sub_word: Option<u32>,
    /// The round constant `Rcon[i/4 - 1]` that was XORed in.
    pub rcon: Option<u32>,
    /// `temp` after the XOR with the round constant.
    pub after_rcon: Option<u32>,
    /// `w[i-4]`.
    pub w_minus_nk: u32,
    /// The finished word `w[i] = w[i-4] ^ temp`.
    pub w: u32,
}

/// Output of [`crate::expand_key`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionResult {
    /// All 44 expanded words; the first four are the key itself.
    #[serde(with = "BigArray")]
    pub words: [u32; 44],
    /// The 11 round keys, each the big-endian serialization of 4 words.
    pub round_keys: RoundKeys,
    /// One step per expanded word index 4..=43, in order.
    pub steps: Vec<ExpansionStep>,
}

/// State checkpoints captured for one round of the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStep {
    /// Round 0: AddRoundKey only.
    Initial {
        /// The loaded plaintext state before AddRoundKey.
        input: Block,
        /// Round key 0 (equal to the cipher key).
        round_key: Block,
    },
    /// Rounds 1..=9: SubBytes, ShiftRows, MixColumns, AddRoundKey.
    Main {
        /// Round number, 1..=9.
        round: usize,
        /// State at round entry.
        start: Block,
        /// State after SubBytes.
        after_sub_bytes: Block,
        /// State after ShiftRows.
        after_shift_rows: Block,
        /// State after MixColumns.
        after_mix_columns: Block,
        /// Round key applied at the end of the round.
        round_key: Block,
    },
    /// Round 10: SubBytes, ShiftRows, AddRoundKey (no MixColumns).
    Final {
        /// State at round entry.
        start: Block,
        /// State after SubBytes.
        after_sub_bytes: Block,
        /// State after ShiftRows.
        after_shift_rows: Block,
        /// Round key 10.
        round_key: Block,
        /// The resulting ciphertext state.
        ciphertext: Block,
    },
}

/// Output of [`crate::encrypt_block`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResult {
    /// The 16-byte ciphertext block.
    pub ciphertext: Block,
    /// Exactly 11 entries: `Initial`, nine `Main`, `Final`.
    pub rounds: Vec<RoundStep>,
}
