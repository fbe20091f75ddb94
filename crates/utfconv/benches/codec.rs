//! Benchmark – single code point `encode` / `decode`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utfconv::{decode, encode};

/// One representative value per sequence length.
const SAMPLES: [(&str, u32); 4] = [
    ("1-byte", 0x41),
    ("2-byte", 0xE9),
    ("3-byte", 0x20AC),
    ("4-byte", 0x1_F980),
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, code_point) in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &code_point, |b, &cp| {
            b.iter(|| black_box(encode(black_box(cp))));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, code_point) in SAMPLES {
        let sequence = encode(code_point).expect("sample is a valid code point");
        group.throughput(Throughput::Bytes(sequence.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &sequence, |b, seq| {
            b.iter(|| black_box(decode(black_box(seq), 0)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_encode, bench_decode }
criterion_main!(benches);
