//! Repeat benchmark: Iterative vs single-shot repetition.
//!
//! Iterative re-measures once per copy, so narrow text in a wide viewport
//! is its worst case.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marquee::marquee::repeat_to_fill;
use marquee::{CellMeasurer, FontDescriptor, MonospaceMeasurer, RepeatStrategy};

fn repeat_narrow_text(c: &mut Criterion) {
    let font = FontDescriptor::default();

    c.bench_function("repeat_iterative_1_col_in_400", |b| {
        b.iter(|| {
            repeat_to_fill(black_box("·"), &font, &CellMeasurer, 400.0, RepeatStrategy::Iterative, 4096)
        })
    });

    c.bench_function("repeat_single_shot_1_col_in_400", |b| {
        b.iter(|| {
            repeat_to_fill(black_box("·"), &font, &CellMeasurer, 400.0, RepeatStrategy::SingleShot, 4096)
        })
    });
}

fn repeat_typical_headline(c: &mut Criterion) {
    let font = FontDescriptor::new("mono", 14.0);
    let measurer = MonospaceMeasurer::default();
    let text = "Markets close higher · 日本語 headline · ";

    c.bench_function("repeat_iterative_headline_px", |b| {
        b.iter(|| repeat_to_fill(black_box(text), &font, &measurer, 1170.0, RepeatStrategy::Iterative, 4096))
    });

    c.bench_function("repeat_single_shot_headline_px", |b| {
        b.iter(|| repeat_to_fill(black_box(text), &font, &measurer, 1170.0, RepeatStrategy::SingleShot, 4096))
    });
}

criterion_group!(benches, repeat_narrow_text, repeat_typical_headline);
criterion_main!(benches);
