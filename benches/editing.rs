//! Benchmarks for the edit engine.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use runedit::editor::EditorBuffer;

fn sample_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("line {i}: the quick brown fox jumps over the lazy dog"))
        .collect()
}

fn bench_typing_with_history(c: &mut Criterion) {
    let lines = sample_lines(10_000);
    c.bench_function("type_100_chars_10k_lines", |b| {
        b.iter(|| {
            let mut buf = EditorBuffer::from_lines(&lines);
            buf.move_to(5_000, 10);
            for _ in 0..100 {
                buf.insert_char(black_box('x'));
            }
            buf
        });
    });
}

fn bench_undo_redo(c: &mut Criterion) {
    let lines = sample_lines(10_000);
    let mut buf = EditorBuffer::from_lines(&lines);
    for _ in 0..200 {
        buf.insert_char('x');
        buf.insert_newline();
    }
    c.bench_function("undo_redo_400_steps", |b| {
        b.iter(|| {
            while buf.undo() {}
            while buf.redo() {}
        });
    });
}

criterion_group!(benches, bench_typing_with_history, bench_undo_redo);
criterion_main!(benches);
