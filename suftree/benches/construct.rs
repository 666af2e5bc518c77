// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use suftree::{Alphabet, SuffixTree};

const SMALLEST_SIZE: usize = 512;
const LARGEST_SIZE: usize = 65536;

/// Deterministic xorshift stream folded onto `'a'..='z'`.
fn lowercase_text(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x9e37_79b9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            b'a' + (state % 26) as u8
        })
        .collect()
}

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    let text = lowercase_text(LARGEST_SIZE);
    let alphabet = Alphabet::new(b"abcdefghijklmnopqrstuvwxyz");

    let mut size = SMALLEST_SIZE;
    while size <= LARGEST_SIZE {
        // Add one to the reported size to account for the terminal
        group
            .throughput(Throughput::Bytes(size as u64 + 1))
            .bench_with_input(BenchmarkId::from_parameter(size), &text[..size], |b, data| {
                b.iter(|| SuffixTree::new(data, alphabet.clone()));
            });

        size *= 4;
    }

    group.finish();
}

criterion_group!(benches, construct);
criterion_main!(benches);
