/*
 * // Copyright 2026 (c) the primext developers. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use primext::{ClampToBounds, EqualsWithin, Normalize, NormalizeInt};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("primext: equals_within f64", |b| {
        b.iter(|| {
            for i in 1..1000 {
                let v = i as f64 / 1000.;
                black_box(v.equals_within(black_box(v + 1e-10), 1e-9));
            }
        })
    });

    c.bench_function("primext: equals_within f32 ~ f64", |b| {
        b.iter(|| {
            for i in 1..1000 {
                let v = i as f32 / 1000.;
                black_box(v.approx_eq(black_box(v as f64)));
            }
        })
    });

    c.bench_function("primext: clamp_to_bounds i32", |b| {
        b.iter(|| {
            for i in -1000..1000 {
                black_box(black_box(i).clamp_to_bounds(-255, 255));
            }
        })
    });

    c.bench_function("primext: normalize f64", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box((i as f64).normalize(0., 1000., -1., 1.));
            }
        })
    });

    c.bench_function("primext: normalize_int u16", |b| {
        b.iter(|| {
            for i in 0..1024u16 {
                black_box(i.normalize_int(0, 1023, 0, 255));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
