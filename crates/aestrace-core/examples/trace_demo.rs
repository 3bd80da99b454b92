//! Walks through the FIPS-197 Appendix B key and plaintext, printing the
//! intermediate values the traces expose.

use aestrace_core::{encrypt_block, expand_key, RoundStep};

fn main() {
    let key: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let plaintext: [u8; 16] = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
        0x34,
    ];

    let expansion = expand_key(&key).expect("key is 16 bytes");
    println!("first transformed expansion step (i = 4):");
    let step = &expansion.steps[0];
    println!("  temp           = {:08x}", step.temp);
    println!("  after RotWord  = {:08x}", step.after_rot_word.unwrap());
    println!("  after SubWord  = {:08x}", step.after_sub_word.unwrap());
    println!("  Rcon           = {:08x}", step.rcon.unwrap());
    println!("  after Rcon     = {:08x}", step.after_rcon.unwrap());
    println!("  w[i]           = {:08x}", step.w);

    let encryption =
        encrypt_block(&plaintext, expansion.round_keys.as_slice()).expect("valid inputs");
    for entry in &encryption.rounds {
        if let RoundStep::Main { round, start, .. } = entry {
            println!("round {round:2} start: {}", to_hex(start));
        }
    }
    println!("ciphertext: {}", to_hex(&encryption.ciphertext));
}

fn to_hex(bytes: &[u8; 16]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
