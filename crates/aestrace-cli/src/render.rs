//! Text rendering for expansion tables and round-state matrices.

use aestrace_core::{state_row, Block, EncryptionResult, ExpansionResult, RoundStep};

const TABLE_HEADER: &str =
    "  i | temp     | After RotWord | After SubWord | Rcon[i/Nk] | After XOR with Rcon | w[i-Nk]  | w[i]";
const TABLE_RULE: &str =
    "----+----------+---------------+---------------+------------+---------------------+----------+---------";

/// Prints the cipher key, AES-128 parameters, initial words, and the full
/// key-expansion table.
pub fn expansion(key: &[u8; 16], result: &ExpansionResult) {
    print!("Cipher Key =");
    for byte in key {
        print!(" {byte:02x}");
    }
    println!();
    println!("For AES-128: Nk = 4, Nr = 10, Nb = 4");
    println!(
        "Initial key words: w0 = {:08x}  w1 = {:08x}  w2 = {:08x}  w3 = {:08x}",
        result.words[0], result.words[1], result.words[2], result.words[3]
    );
    println!();
    println!("{TABLE_HEADER}");
    println!("{TABLE_RULE}");
    for step in &result.steps {
        println!(
            " {:2} | {:08x} | {:<13} | {:<13} | {:<10} | {:<19} | {:08x} | {:08x}",
            step.index,
            step.temp,
            word_cell(step.after_rot_word),
            word_cell(step.after_sub_word),
            word_cell(step.rcon),
            word_cell(step.after_rcon),
            step.w_minus_nk,
            step.w,
        );
    }
}

/// Prints every round of the encryption as labeled 4×4 state matrices,
/// followed by the ciphertext.
pub fn encryption(plaintext: &[u8; 16], result: &EncryptionResult) {
    println!("Plaintext  = {}", hex::encode(plaintext));
    println!();
    for entry in &result.rounds {
        match entry {
            RoundStep::Initial { input, round_key } => {
                println!("Initial Round (AddRoundKey)");
                matrices(&[("Input", input), ("Round Key", round_key)]);
            }
            RoundStep::Main {
                round,
                start,
                after_sub_bytes,
                after_shift_rows,
                after_mix_columns,
                round_key,
            } => {
                println!("Round {round}");
                matrices(&[
                    ("Start", start),
                    ("SubBytes", after_sub_bytes),
                    ("ShiftRows", after_shift_rows),
                    ("MixColumns", after_mix_columns),
                    ("Round Key", round_key),
                ]);
            }
            RoundStep::Final {
                start,
                after_sub_bytes,
                after_shift_rows,
                round_key,
                ciphertext,
            } => {
                println!("Final Round (Round 10, no MixColumns)");
                matrices(&[
                    ("Start", start),
                    ("SubBytes", after_sub_bytes),
                    ("ShiftRows", after_shift_rows),
                    ("Round Key", round_key),
                    ("Ciphertext", ciphertext),
                ]);
            }
        }
    }
    println!("Ciphertext = {}", hex::encode(result.ciphertext));
}

/// Renders the named states side by side, one 4×4 matrix each.
fn matrices(labeled: &[(&str, &Block)]) {
    let mut header = String::new();
    for (label, _) in labeled {
        header.push_str(&format!("  {label:<12}"));
    }
    println!("{}", header.trim_end());
    for r in 0..4 {
        let mut line = String::new();
        for (_, block) in labeled {
            let row = state_row(block, r);
            line.push_str(&format!(
                "  {:02x} {:02x} {:02x} {:02x} ",
                row[0], row[1], row[2], row[3]
            ));
        }
        println!("{}", line.trim_end());
    }
    println!();
}

fn word_cell(value: Option<u32>) -> String {
    match value {
        Some(word) => format!("{word:08x}"),
        None => String::new(),
    }
}
