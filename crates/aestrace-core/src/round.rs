//! AES round transformations, applied to the state in place.

use crate::block::{xor_in_place, Block};
use crate::gf;
use crate::sbox::sbox;

/// Applies SubBytes: each state byte through the forward S-box.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows: row `r` of the column-major state is cyclically
/// left-rotated by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    tmp[0] = state[0];
    tmp[1] = state[5];
    tmp[2] = state[10];
    tmp[3] = state[15];

    tmp[4] = state[4];
    tmp[5] = state[9];
    tmp[6] = state[14];
    tmp[7] = state[3];

    tmp[8] = state[8];
    tmp[9] = state[13];
    tmp[10] = state[2];
    tmp[11] = state[7];

    tmp[12] = state[12];
    tmp[13] = state[1];
    tmp[14] = state[6];
    tmp[15] = state[11];

    *state = tmp;
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gf::mul(0x02, a0) ^ gf::mul(0x03, a1) ^ a2 ^ a3;
    col[1] = a0 ^ gf::mul(0x02, a1) ^ gf::mul(0x03, a2) ^ a3;
    col[2] = a0 ^ a1 ^ gf::mul(0x02, a2) ^ gf::mul(0x03, a3);
    col[3] = gf::mul(0x03, a0) ^ a1 ^ a2 ^ gf::mul(0x02, a3);
}

/// MixColumns over all four columns: the fixed MDS matrix
/// `[[2,3,1,1],[1,2,3,1],[1,1,2,3],[3,1,1,2]]` times each column in GF(2^8).
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column);
        state[idx] = column[0];
        state[idx + 1] = column[1];
        state[idx + 2] = column[2];
        state[idx + 3] = column[3];
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
