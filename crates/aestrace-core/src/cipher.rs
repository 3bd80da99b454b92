//! Traced AES-128 single-block encryption.

use crate::block::Block;
use crate::error::{Error, Result};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::ROUND_KEY_COUNT;
use crate::trace::{EncryptionResult, RoundStep};

/// Encrypts one 16-byte block with pre-expanded round keys, recording the
/// state at every checkpoint of every round.
///
/// Runs round 0 (AddRoundKey), nine main rounds, and the final round without
/// MixColumns, per FIPS-197 §5.1. The plaintext is loaded into the state in
/// column-major order and the final state is serialized back the same way.
///
/// Fails with [`Error::InvalidBlockLength`] unless `plaintext` is exactly 16
/// bytes, or [`Error::InvalidRoundKeyCount`] unless `round_keys` holds
/// exactly 11 entries.
pub fn encrypt_block(plaintext: &[u8], round_keys: &[Block]) -> Result<EncryptionResult> {
    let mut state: Block = plaintext
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(plaintext.len()))?;
    if round_keys.len() != ROUND_KEY_COUNT {
        return Err(Error::InvalidRoundKeyCount(round_keys.len()));
    }

    let mut rounds = Vec::with_capacity(ROUND_KEY_COUNT);

    rounds.push(RoundStep::Initial {
        input: state,
        round_key: round_keys[0],
    });
    add_round_key(&mut state, &round_keys[0]);

    for round in 1..10 {
        let start = state;
        sub_bytes(&mut state);
        let after_sub_bytes = state;
        shift_rows(&mut state);
        let after_shift_rows = state;
        mix_columns(&mut state);
        let after_mix_columns = state;
        add_round_key(&mut state, &round_keys[round]);

        rounds.push(RoundStep::Main {
            round,
            start,
            after_sub_bytes,
            after_shift_rows,
            after_mix_columns,
            round_key: round_keys[round],
        });
    }

    let start = state;
    sub_bytes(&mut state);
    let after_sub_bytes = state;
    shift_rows(&mut state);
    let after_shift_rows = state;
    add_round_key(&mut state, &round_keys[10]);

    rounds.push(RoundStep::Final {
        start,
        after_sub_bytes,
        after_shift_rows,
        round_key: round_keys[10],
        ciphertext: state,
    });

    Ok(EncryptionResult {
        ciphertext: state,
        rounds,
    })
}
