//! AES-128 key schedule with per-word trace capture.

use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};
use crate::sbox::sbox;
use crate::trace::{ExpansionResult, ExpansionStep};

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a 128-bit key into 44 words and 11 round keys, recording every
/// intermediate value of the expansion.
///
/// Fails with [`crate::Error::InvalidKeyLength`] unless `key` is exactly 16
/// bytes; all byte values are valid.
pub fn expand_key(key: &[u8]) -> Result<ExpansionResult> {
    let key = Aes128Key::try_from(key)?;

    let mut w = [0u32; 44];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    let mut steps = Vec::with_capacity(40);
    for i in 4..44 {
        let mut temp = w[i - 1];
        let mut step = ExpansionStep {
            index: i,
            temp,
            after_rot_word: None,
            after_sub_word: None,
            rcon: None,
            after_rcon: None,
            w_minus_nk: w[i - 4],
            w: 0,
        };
        if i % 4 == 0 {
            let rotated = rot_word(temp);
            step.after_rot_word = Some(rotated);

            let subbed = sub_word(rotated);
            step.after_sub_word = Some(subbed);

            let rcon = u32::from(RCON[i / 4 - 1]) << 24;
            step.rcon = Some(rcon);

            temp = subbed ^ rcon;
            step.after_rcon = Some(temp);
        }
        w[i] = w[i - 4] ^ temp;
        step.w = w[i];
        steps.push(step);
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    Ok(ExpansionResult {
        words: w,
        round_keys: RoundKeys(round_keys),
        steps,
    })
}

/// Round keys produced for AES-128: Nr + 1.
pub(crate) const ROUND_KEY_COUNT: usize = 11;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn first_words_pack_the_key_big_endian() {
        let result = expand_key(&FIPS_KEY).unwrap();
        assert_eq!(
            &result.words[..4],
            &[0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c]
        );
    }

    #[test]
    fn appendix_a_first_transformed_step() {
        let result = expand_key(&FIPS_KEY).unwrap();
        let step = &result.steps[0];
        assert_eq!(step.index, 4);
        assert_eq!(step.temp, 0x09cf4f3c);
        assert_eq!(step.after_rot_word, Some(0xcf4f3c09));
        assert_eq!(step.after_sub_word, Some(0x8a84eb01));
        assert_eq!(step.rcon, Some(0x01000000));
        assert_eq!(step.after_rcon, Some(0x8b84eb01));
        assert_eq!(step.w_minus_nk, 0x2b7e1516);
        assert_eq!(step.w, 0xa0fafe17);
    }

    #[test]
    fn appendix_a_selected_words() {
        let result = expand_key(&FIPS_KEY).unwrap();
        assert_eq!(result.words[4], 0xa0fafe17);
        assert_eq!(result.words[5], 0x88542cb1);
        assert_eq!(result.words[6], 0x23a33939);
        assert_eq!(result.words[7], 0x2a6c7605);
        assert_eq!(result.words[8], 0xf2c295f2);
        assert_eq!(result.words[43], 0xb6630ca6);
    }

    #[test]
    fn round_key_zero_is_the_cipher_key() {
        let result = expand_key(&FIPS_KEY).unwrap();
        assert_eq!(result.round_keys.get(0), &FIPS_KEY);
    }

    #[test]
    fn appendix_a_final_round_key() {
        let result = expand_key(&FIPS_KEY).unwrap();
        let expected: [u8; 16] = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];
        assert_eq!(result.round_keys.get(10), &expected);
    }

    #[test]
    fn always_44_words_and_11_round_keys() {
        for fill in [0x00u8, 0x5a, 0xff] {
            let result = expand_key(&[fill; 16]).unwrap();
            assert_eq!(result.words.len(), 44);
            assert_eq!(result.round_keys.as_slice().len(), ROUND_KEY_COUNT);
            assert_eq!(result.steps.len(), 40);
        }
    }

    #[test]
    fn expansion_recurrence_holds_for_every_step() {
        let result = expand_key(&FIPS_KEY).unwrap();
        for step in &result.steps {
            let temp = if step.index % 4 == 0 {
                step.after_rcon.unwrap()
            } else {
                step.temp
            };
            assert_eq!(step.w, step.w_minus_nk ^ temp);
        }
    }

    #[test]
    fn non_rcon_rows_carry_no_transform_values() {
        let result = expand_key(&FIPS_KEY).unwrap();
        for step in &result.steps {
            if step.index % 4 == 0 {
                assert!(step.after_rot_word.is_some());
                assert!(step.after_sub_word.is_some());
                assert!(step.rcon.is_some());
                assert!(step.after_rcon.is_some());
            } else {
                assert_eq!(step.after_rot_word, None);
                assert_eq!(step.after_sub_word, None);
                assert_eq!(step.rcon, None);
                assert_eq!(step.after_rcon, None);
            }
        }
    }

    #[test]
    fn wrong_key_lengths_are_rejected() {
        assert_eq!(
            expand_key(&[0u8; 15]).unwrap_err(),
            Error::InvalidKeyLength(15)
        );
        assert_eq!(
            expand_key(&[0u8; 17]).unwrap_err(),
            Error::InvalidKeyLength(17)
        );
    }

    #[test]
    fn expansion_result_survives_json() {
        let result = expand_key(&FIPS_KEY).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let reloaded: crate::ExpansionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, result);
    }
}
