//! Command-line interface for `aestrace`.

#![forbid(unsafe_code)]

mod render;

use aestrace_core::{encrypt_block, expand_key, EncryptionResult, ExpansionResult};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// FIPS-197 Appendix B cipher key.
const APPENDIX_B_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
/// FIPS-197 Appendix B plaintext.
const APPENDIX_B_PLAINTEXT: &str = "3243f6a8885a308d313198a2e0370734";
/// FIPS-197 Appendix B ciphertext.
const APPENDIX_B_CIPHERTEXT: &str = "3925841d02dc09fbdc118597196a0b32";

/// AES-128 step tracer CLI.
#[derive(Parser)]
#[command(
    name = "aestrace",
    version,
    author,
    about = "AES-128 key-expansion and encryption step tracer (FIPS-197)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a key and render the key-expansion table.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Emit the expansion trace as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Encrypt one block and render the round-by-round states.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        plaintext_hex: String,
        /// Emit the encryption trace as JSON instead of matrices.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate a random 128-bit key and render its expansion table.
    RandomKey {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the expansion trace as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the FIPS-197 Appendix B key and plaintext end to end.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Expand { key_hex, json } => cmd_expand(&key_hex, json),
        Commands::Encrypt {
            key_hex,
            plaintext_hex,
            json,
        } => cmd_encrypt(&key_hex, &plaintext_hex, json),
        Commands::RandomKey { seed, json } => cmd_random_key(seed, json),
        Commands::Demo => cmd_demo(),
    }
}

fn cmd_expand(key_hex: &str, json: bool) -> Result<()> {
    let key = parse_block_hex(key_hex, "key")?;
    let expansion = run_expansion(&key)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&expansion)?);
    } else {
        render::expansion(&key, &expansion);
    }
    Ok(())
}

fn cmd_encrypt(key_hex: &str, plaintext_hex: &str, json: bool) -> Result<()> {
    let key = parse_block_hex(key_hex, "key")?;
    let plaintext = parse_block_hex(plaintext_hex, "plaintext")?;
    let expansion = run_expansion(&key)?;
    let encryption = run_encryption(&plaintext, &expansion)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&encryption)?);
    } else {
        render::encryption(&plaintext, &encryption);
        appendix_b_note(key_hex, plaintext_hex, &encryption);
    }
    Ok(())
}

fn cmd_random_key(seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    println!("random key: {}", hex::encode(key));
    let expansion = run_expansion(&key)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&expansion)?);
    } else {
        render::expansion(&key, &expansion);
    }
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let key = parse_block_hex(APPENDIX_B_KEY, "key")?;
    let plaintext = parse_block_hex(APPENDIX_B_PLAINTEXT, "plaintext")?;
    let expansion = run_expansion(&key)?;
    render::expansion(&key, &expansion);
    println!();
    let encryption = run_encryption(&plaintext, &expansion)?;
    render::encryption(&plaintext, &encryption);
    appendix_b_note(APPENDIX_B_KEY, APPENDIX_B_PLAINTEXT, &encryption);
    Ok(())
}

fn run_expansion(key: &[u8; 16]) -> Result<ExpansionResult> {
    expand_key(key).context("expand key")
}

fn run_encryption(plaintext: &[u8; 16], expansion: &ExpansionResult) -> Result<EncryptionResult> {
    encrypt_block(plaintext, expansion.round_keys.as_slice()).context("encrypt block")
}

fn appendix_b_note(key_hex: &str, plaintext_hex: &str, encryption: &EncryptionResult) {
    if key_hex.trim().eq_ignore_ascii_case(APPENDIX_B_KEY)
        && plaintext_hex.trim().eq_ignore_ascii_case(APPENDIX_B_PLAINTEXT)
        && hex::encode(encryption.ciphertext) == APPENDIX_B_CIPHERTEXT
    {
        println!("the result matches the FIPS-197 Appendix B test vector");
    }
}

/// Decodes a 32-hex-character block, rejecting bad lengths and non-hex
/// characters before the core is invoked.
fn parse_block_hex(hex_str: &str, what: &str) -> Result<[u8; 16]> {
    let trimmed = hex_str.trim();
    if trimmed.len() != 32 {
        bail!(
            "{what} must be 32 hex characters (128 bits), got {}",
            trimmed.len()
        );
    }
    let bytes = hex::decode(trimmed).with_context(|| format!("decode {what} hex"))?;
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
