//! Benchmarks for substring search.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use runedit::document::Document;
use runedit::search::find_matches;

fn bench_find_common_word(c: &mut Criterion) {
    let doc = Document::from_lines(
        (0..10_000).map(|i| format!("row {i}: the quick brown fox jumps over the lazy dog")),
    );
    c.bench_function("find_common_word_10k_lines", |b| {
        b.iter(|| find_matches(&doc, black_box("the")));
    });
}

fn bench_find_overlapping(c: &mut Criterion) {
    let doc = Document::from_lines((0..1_000).map(|_| "a".repeat(200)));
    c.bench_function("find_overlapping_1k_lines", |b| {
        b.iter(|| find_matches(&doc, black_box("aaaa")));
    });
}

criterion_group!(benches, bench_find_common_word, bench_find_overlapping);
criterion_main!(benches);
