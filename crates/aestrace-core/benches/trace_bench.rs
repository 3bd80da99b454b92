use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aestrace_core::{encrypt_block, expand_key};

fn bench_expansion(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);

    let mut group = c.benchmark_group("expansion");
    group.bench_function("expand_key_with_trace", |b| {
        b.iter(|| expand_key(&key).unwrap());
    });
    group.finish();
}

fn bench_encryption(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 16];
    let mut plaintext = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut plaintext);
    let expansion = expand_key(&key).unwrap();

    let mut group = c.benchmark_group("encryption");
    group.bench_function("encrypt_block_with_trace", |b| {
        b.iter(|| encrypt_block(&plaintext, expansion.round_keys.as_slice()).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_expansion, bench_encryption);
criterion_main!(benches);
