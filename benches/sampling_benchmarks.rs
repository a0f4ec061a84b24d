//! Benchmarks for the pure pipeline stages: sample position computation and
//! frame padding.
//!
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use filmstrip::{pad_to_width_ratio, sample_indices};
use image::{DynamicImage, RgbImage};

fn benchmark_sample_indices(criterion: &mut Criterion) {
    criterion.bench_function("sample 6 of 100k frames", |bencher| {
        bencher.iter(|| sample_indices(black_box(100_000), black_box(6)));
    });

    criterion.bench_function("sample 1000 of 100k frames", |bencher| {
        bencher.iter(|| sample_indices(black_box(100_000), black_box(1_000)));
    });
}

fn benchmark_padding(criterion: &mut Criterion) {
    let tall_frame = DynamicImage::ImageRgb8(RgbImage::new(720, 1280));
    let wide_frame = DynamicImage::ImageRgb8(RgbImage::new(1280, 720));

    criterion.bench_function("pad 720x1280 to ratio 1.1", |bencher| {
        bencher.iter(|| pad_to_width_ratio(black_box(&tall_frame), black_box(1.1)));
    });

    criterion.bench_function("pad no-op on a wide frame", |bencher| {
        bencher.iter(|| pad_to_width_ratio(black_box(&wide_frame), black_box(1.1)));
    });
}

criterion_group!(benches, benchmark_sample_indices, benchmark_padding);
criterion_main!(benches);
