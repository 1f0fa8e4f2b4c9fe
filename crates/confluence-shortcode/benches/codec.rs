//! Benchmarks for short code encoding and decoding.

use confluence_shortcode::{decode, encode, parse_short_url};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const IDS: [u64; 4] = [1, 65_536, 1_234_567_890, u64::MAX];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for id in IDS {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, &id| {
            b.iter(|| encode(std::hint::black_box(id)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for id in IDS {
        let code = encode(id);
        group.bench_with_input(BenchmarkId::from_parameter(id), &code, |b, code| {
            b.iter(|| decode(std::hint::black_box(code)));
        });
    }
    group.finish();
}

fn bench_parse_short_url(c: &mut Criterion) {
    c.bench_function("parse_short_url", |b| {
        b.iter(|| {
            parse_short_url(std::hint::black_box(
                "https://wiki.example.com/x/0gKWSQ?src=mail",
            ))
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_parse_short_url);
criterion_main!(benches);
