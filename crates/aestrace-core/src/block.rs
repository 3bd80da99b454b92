//! Block representation helpers.

/// AES block of 16 bytes.
///
/// When used as a cipher state the bytes are in column-major order: byte `k`
/// of the block sits at row `k % 4`, column `k / 4` of the 4×4 state matrix.
pub type Block = [u8; 16];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns row `r` (0..=3) of the state matrix held in `block`.
#[inline]
pub fn state_row(block: &Block, r: usize) -> [u8; 4] {
    [block[r], block[4 + r], block[8 + r], block[12 + r]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_in_place_is_bytewise() {
        let mut a: Block = [0xff; 16];
        let b: Block = core::array::from_fn(|i| i as u8);
        xor_in_place(&mut a, &b);
        for (i, byte) in a.iter().enumerate() {
            assert_eq!(*byte, 0xff ^ i as u8);
        }
    }

    #[test]
    fn state_rows_follow_column_major_layout() {
        let block: Block = core::array::from_fn(|i| i as u8);
        assert_eq!(state_row(&block, 0), [0, 4, 8, 12]);
        assert_eq!(state_row(&block, 3), [3, 7, 11, 15]);
    }
}
