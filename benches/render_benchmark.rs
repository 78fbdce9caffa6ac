use celltex::{encode, render, RangeContext, RenderConfig, StyleContext};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_encode(c: &mut Criterion) {
    let plain = "Quarterly revenue grew across every region".repeat(4);
    let reserved = "50% of $x_1^2 \\ path\nnext line".repeat(4);

    c.bench_function("encode_plain", |b| b.iter(|| encode(black_box(&plain))));
    c.bench_function("encode_reserved", |b| {
        b.iter(|| encode(black_box(&reserved)))
    });
}

fn benchmark_render_cell(c: &mut Criterion) {
    let unstyled = StyleContext::plain("Total");
    let styled = StyleContext::new((200, 10, 10), true, true, true, "Total: 95%");

    c.bench_function("render_unstyled", |b| b.iter(|| render(black_box(&unstyled))));
    c.bench_function("render_styled", |b| b.iter(|| render(black_box(&styled))));
}

fn benchmark_render_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_range");
    let renderer = RenderConfig::default().renderer();

    for size in [10usize, 100, 300].iter() {
        let cells = (0..size * size)
            .map(|i| {
                StyleContext::plain(format!("cell_{}\n{}%", i, i % 100))
                    .with_bold(i % 3 == 0)
                    .with_color(((i % 256) as u8, 0, 0))
            })
            .collect();
        let range = RangeContext::new(*size, *size, cells).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(range.render_with(&renderer)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_render_cell,
    benchmark_render_range
);
criterion_main!(benches);
