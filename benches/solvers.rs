// Copyright (c) 2015, Mikhail Vorotilov
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Benchmarks for the closed-form solvers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use real_roots::{find_roots_cubic, find_roots_quadratic, find_roots_quartic, solve};

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");

    group.bench_function("quadratic", |b| {
        b.iter(|| find_roots_quadratic(black_box(1f64), black_box(-3f64), black_box(2f64)))
    });
    group.bench_function("cubic", |b| {
        b.iter(|| find_roots_cubic(black_box(1f64), black_box(-6f64), black_box(11f64), black_box(-6f64)))
    });
    group.bench_function("quartic", |b| {
        b.iter(|| {
            find_roots_quartic(
                black_box(1f64),
                black_box(-10f64),
                black_box(35f64),
                black_box(-50f64),
                black_box(24f64),
            )
        })
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    let equations: [&[f64]; 4] = [
        &[2f64, 4f64],
        &[1f64, 0f64, -1f64],
        &[1f64, -6f64, 11f64, -6f64],
        &[1f64, 2f64, -13f64, -14f64, 24f64],
    ];
    for coefficients in equations {
        group.bench_with_input(
            BenchmarkId::new("degree", coefficients.len() - 1),
            coefficients,
            |b, coefficients| b.iter(|| solve(black_box(coefficients))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solvers, bench_dispatch);
criterion_main!(benches);
