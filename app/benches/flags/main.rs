/*
 * // Copyright 2026 (c) the primext developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use bitflags::bitflags;
use criterion::{Criterion, criterion_group, criterion_main};
use primext::{FlagsExt, ToFlags};
use std::hint::black_box;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Channels: u64 {
        const ALL = !0;
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let values: Vec<Channels> = (0..1000u64)
        .map(|i| Channels::from_bits_retain(i.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
        .collect();

    c.bench_function("primext: enumerate_flags u64", |b| {
        b.iter(|| {
            for value in values.iter() {
                for flag in value.enumerate_flags() {
                    black_box(flag);
                }
            }
        })
    });

    c.bench_function("primext: to_single_flags -> to_flags u64", |b| {
        b.iter(|| {
            for value in values.iter() {
                black_box(value.to_single_flags().into_iter().to_flags());
            }
        })
    });

    c.bench_function("primext: has_any_flag u64", |b| {
        let candidates = [
            Channels::from_bits_retain(0b1100),
            Channels::from_bits_retain(1 << 40),
            Channels::from_bits_retain(0b11 << 60),
        ];
        b.iter(|| {
            for value in values.iter() {
                black_box(value.has_any_flag_of(&candidates));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
