//! Full factory benchmarks: normalization plus every pipeline stage.
//!
//! Each identifier kind is measured on a valid corpus and on a corrupted
//! copy, since invalid input reports errors instead of building an instance.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use finident_bench::{
    SizeTier, corrupt, generate_bics, generate_cards, generate_ibans, generate_routing_numbers,
};
use finident_core::{AccountIdentifier, CreditCardNumber, RoutingNumber, SwiftCode};

fn count_valid<F>(values: &[String], f: F) -> usize
where
    F: Fn(&str) -> bool,
{
    values.iter().filter(|v| f(black_box(v))).count()
}

fn bench_factories(c: &mut Criterion) {
    let mut group = c.benchmark_group("factories");
    let tier = SizeTier::Medium;
    let count = tier.count();
    group.throughput(Throughput::Elements(count as u64));

    let ibans = generate_ibans(7, count);
    let cards = generate_cards(7, count);
    let routing = generate_routing_numbers(7, count);
    let bics = generate_bics(7, count);

    for (label, values) in [
        ("valid", ibans.clone()),
        ("corrupt", corrupt(&ibans, 11)),
    ] {
        group.bench_with_input(BenchmarkId::new("account", label), &values, |b, values| {
            b.iter(|| count_valid(values, |v| AccountIdentifier::try_create(v, None).1.is_some()));
        });
    }

    for (label, values) in [
        ("valid", cards.clone()),
        ("corrupt", corrupt(&cards, 11)),
    ] {
        group.bench_with_input(BenchmarkId::new("card", label), &values, |b, values| {
            b.iter(|| count_valid(values, |v| CreditCardNumber::try_create(v, None).1.is_some()));
        });
    }

    for (label, values) in [
        ("valid", routing.clone()),
        ("corrupt", corrupt(&routing, 11)),
    ] {
        group.bench_with_input(BenchmarkId::new("routing", label), &values, |b, values| {
            b.iter(|| count_valid(values, |v| RoutingNumber::try_create(v, None).1.is_some()));
        });
    }

    group.bench_with_input(BenchmarkId::new("swift", "valid"), &bics, |b, values| {
        b.iter(|| count_valid(values, |v| SwiftCode::try_create(v, None).1.is_some()));
    });

    group.finish();
}

criterion_group!(benches, bench_factories);
criterion_main!(benches);
