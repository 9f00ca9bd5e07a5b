//! Benchmarks for docshift extraction and encoding.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docshift::{Converter, SourceDocument, TargetFormat};

/// Creates plain text with the given number of lines.
fn create_test_text(line_count: usize) -> String {
    (0..line_count)
        .map(|i| format!("Line {} - benchmark content with (parens), {{braces}} & \"quotes\".", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Creates a content stream with one text-show operator per line.
fn create_test_stream(line_count: usize) -> Vec<u8> {
    let mut content = String::from("BT /F1 12 Tf 50 750 Td\n");
    for i in 0..line_count {
        content.push_str(&format!("(Line {} of the benchmark stream) Tj 0 -14 Td\n", i + 1));
    }
    content.push_str("ET");
    content.into_bytes()
}

/// Benchmark each encoder on the same text.
fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let registry = docshift::EncoderRegistry::default();
    let text = create_test_text(500);

    for format in TargetFormat::ALL {
        group.bench_function(format.extension(), |b| {
            b.iter(|| registry.encode(black_box(&text), format, "bench").unwrap());
        });
    }

    group.finish();
}

/// Benchmark the extraction heuristics at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_pdf");

    for line_count in [10, 100, 1000].iter() {
        let data = create_test_stream(*line_count);

        group.bench_function(format!("{}_lines", line_count), |b| {
            b.iter(|| docshift::extract_text(black_box(&data), "application/pdf", "bench.pdf").unwrap());
        });
    }

    group.finish();
}

/// Benchmark a full text-to-PDF conversion.
fn bench_end_to_end(c: &mut Criterion) {
    let converter = Converter::new();
    let source = SourceDocument::new(create_test_text(200), "text/plain", "bench.txt");

    c.bench_function("txt_to_pdf", |b| {
        b.iter(|| converter.convert(black_box(&source), TargetFormat::Pdf).unwrap());
    });
}

criterion_group!(benches, bench_encoders, bench_extraction, bench_end_to_end);
criterion_main!(benches);
