//! Throughput of the classification pass
//!
//! Run with: cargo bench --bench classification_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scriptstat_core::{AnalysisOptions, Analyzer, CountingUnit};
use std::hint::black_box;

/// Generate mixed-script text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "Hello мир і світ! 漢字とカタカナ. Tiếng Việt, Türkçe, español 123 € 🎉 ";
    let repeat_count = size / base.len() + 1;

    let mut text = base.repeat(repeat_count);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let analyzer = Analyzer::new(AnalysisOptions::default());

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("analyze_str", size), &text, |b, text| {
            b.iter(|| analyzer.analyze_str(black_box(text)));
        });
    }

    group.finish();
}

fn bench_front_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_ends");
    let text = generate_text(102_400);
    let units: Vec<u16> = text.encode_utf16().collect();
    let analyzer = Analyzer::new(AnalysisOptions {
        counting_unit: CountingUnit::ScalarValues,
        detect_encoding: false,
    });

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("str", |b| b.iter(|| analyzer.analyze_str(black_box(&text))));
    group.bench_function("utf16", |b| {
        b.iter(|| analyzer.analyze_utf16(black_box(&units)))
    });

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_front_ends);
criterion_main!(benches);
