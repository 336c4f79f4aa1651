// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use redoubt_sha2::{Algorithm, DigestEngine, SHA512_SPLIT, Sha2Engine, digest};

fn benchmark_one_shot(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(algorithm.name());

        for len in [64, 1024, 16 * 1024, 1024 * 1024].iter() {
            let data = vec![0xA5u8; *len];

            group.throughput(Throughput::Bytes(*len as u64));
            group.bench_with_input(format!("{} bytes", len), len, |b, _| {
                b.iter(|| digest(algorithm, black_box(&data)).expect("digest failed"));
            });
        }
        group.finish();
    }
}

fn benchmark_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let data = vec![0x5Au8; 64 * 1024];
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Odd chunk size keeps the block buffer busy on every call
    for chunk in [1, 61, 4096].iter() {
        group.bench_with_input(format!("SHA-256 chunk {}", chunk), chunk, |b, &chunk| {
            b.iter(|| {
                let mut engine = DigestEngine::new(Algorithm::Sha256);
                for piece in data.chunks(chunk) {
                    engine.update(black_box(piece)).expect("update failed");
                }
                engine.finish().expect("finish failed")
            });
        });
    }
    group.finish();
}

fn benchmark_split_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA-512 split words");
    let data = vec![0xA5u8; 16 * 1024];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("16384 bytes", |b| {
        b.iter(|| {
            let mut engine = Sha2Engine::with_params(&SHA512_SPLIT);
            engine.update(black_box(&data)).expect("update failed");
            engine.finish().expect("finish failed")
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_one_shot,
    benchmark_streaming,
    benchmark_split_words
);
criterion_main!(benches);
