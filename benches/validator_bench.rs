//! Benchmarks for address validation.
//!
//! The validator runs on every submit, so it should stay trivially cheap.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use devnet_airdrop::is_valid_address;

fn bench_is_valid_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid_address");

    let cases = [
        (
            "valid_44",
            "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T".to_string(),
        ),
        ("valid_32", "1".repeat(32)),
        ("bad_char", format!("{}0", "1".repeat(31))),
        ("too_short", "1".repeat(31)),
    ];

    for (name, input) in cases.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| is_valid_address(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_is_valid_address);
criterion_main!(benches);
