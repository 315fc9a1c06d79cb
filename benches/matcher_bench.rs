use acmatch::Matcher;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const ALPHABET: &[char] = &['a', 'b', 'c', 'd', 'e', '中', '国', '人'];

// Test data generators
fn generate_patterns(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(2..=8);
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
                .collect()
        })
        .collect()
}

fn generate_text(rng: &mut StdRng, chars: usize) -> String {
    (0..chars)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

// Benchmark 1: Build Performance
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let mut rng = StdRng::seed_from_u64(42);

    for count in [10, 100, 1000, 10000].iter() {
        let patterns = generate_patterns(&mut rng, *count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &patterns, |b, patterns| {
            b.iter(|| {
                let m = Matcher::from_patterns(black_box(patterns)).unwrap();
                black_box(m);
            });
        });
    }

    group.finish();
}

// Benchmark 2: Query Performance
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let mut rng = StdRng::seed_from_u64(7);

    for &pattern_count in &[10, 1000] {
        let patterns = generate_patterns(&mut rng, pattern_count);
        let m = Matcher::from_patterns(&patterns).unwrap();

        for &text_chars in &[1_000, 100_000] {
            let text = generate_text(&mut rng, text_chars);
            group.throughput(Throughput::Bytes(text.len() as u64));

            let id = format!("p{}_t{}", pattern_count, text_chars);
            group.bench_with_input(BenchmarkId::new("is_match", &id), &text, |b, text| {
                b.iter(|| black_box(m.is_match(black_box(text)).unwrap()));
            });
            group.bench_with_input(BenchmarkId::new("search_indexed", &id), &text, |b, text| {
                b.iter(|| black_box(m.search_indexed(black_box(text)).unwrap()));
            });
            group.bench_with_input(BenchmarkId::new("search", &id), &text, |b, text| {
                b.iter(|| black_box(m.search(black_box(text)).unwrap()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
