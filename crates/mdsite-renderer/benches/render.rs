//! Benchmarks for the render pipeline.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mdsite_renderer::render;

/// Generate a document mixing every construct the dialect supports.
fn generate_markdown(sections: usize) -> String {
    let mut md = String::with_capacity(sections * 300);
    md.push_str("# Document Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str(&format!("Paragraph {i} with `inline` code.\n\n"));
        md.push_str("```\nfn main() {\n    println!(\"<hello>\");\n}\n```\n\n");
        md.push_str("|Name|Value|\n|---|---|\n");
        md.push_str(&format!("|row {i}|{i}|\n\n"));
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| render("# Hello\n\nSimple content."));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_size");

    for sections in [10, 100, 1000] {
        let markdown = generate_markdown(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &markdown,
            |b, markdown| b.iter(|| render(markdown)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_simple, bench_render_varying_sizes);
criterion_main!(benches);
