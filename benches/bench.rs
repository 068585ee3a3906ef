//! Criterion benchmarks for anagram key computation and dictionary operations.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use anagram::analysis::{Classification, KeyCanonicalizer};
use anagram::dictionary::AnagramDictionary;

/// Generate pseudo-random words for benchmarking.
fn generate_test_words(count: usize) -> Vec<String> {
    let syllables = [
        "an", "ag", "ram", "lis", "ten", "si", "lent", "ka", "yak", "dor", "mi", "to", "ry", "C\t",
        "***", "Ab", "42",
    ];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let length = 2 + (i % 4);
        let word: String = (0..length)
            .map(|j| syllables[(i * 7 + j * 13) % syllables.len()])
            .collect();
        words.push(word);
    }

    words
}

/// Benchmark key computation.
fn bench_key_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_computation");
    let words = generate_test_words(1000);

    for classification in [Classification::Ascii, Classification::Unicode] {
        let canonicalizer = KeyCanonicalizer::new(classification);
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_function(format!("compute_keys_{}", classification.name()), |b| {
            b.iter(|| {
                for word in &words {
                    black_box(canonicalizer.compute_key(black_box(word)));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark dictionary insert and lookup.
fn bench_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");
    let words = generate_test_words(10_000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("insert_sequential", |b| {
        b.iter(|| {
            let mut dictionary = AnagramDictionary::new();
            for word in &words {
                dictionary.insert(word);
            }
            black_box(dictionary)
        })
    });

    group.bench_function("insert_batch", |b| {
        b.iter(|| {
            let mut dictionary = AnagramDictionary::new();
            dictionary.insert_batch(words.as_slice());
            black_box(dictionary)
        })
    });

    let dictionary: AnagramDictionary = words.iter().collect();
    group.bench_function("lookup", |b| {
        b.iter(|| {
            for word in words.iter().take(1000) {
                black_box(dictionary.lookup(black_box(word)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_key_computation, bench_dictionary);
criterion_main!(benches);
