//! Arithmetic in GF(2^8) with the AES reduction polynomial.

/// Multiplies two field elements modulo x^8 + x^4 + x^3 + x + 1.
///
/// Shift-and-add over 8 bits, reducing by 0x1b whenever the shift overflows.
/// Total over all byte pairs; not constant-time.
#[inline]
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}
