use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use statboard::{presentation::config::Theme, Dashboard, DashboardContent, LayoutVariant};

fn render(content: &DashboardContent, variant: LayoutVariant, area: Rect) -> Buffer {
    let mut buffer = Buffer::empty(area);
    Dashboard::new(content, variant, Theme::default()).render(area, &mut buffer);
    buffer
}

fn criterion_benchmark(c: &mut Criterion) {
    let content = DashboardContent::default();
    let area = Rect::new(0, 0, 160, 48);

    let mut group = c.benchmark_group("render_dashboard");
    group.bench_function("compact", |b| {
        b.iter(|| render(black_box(&content), LayoutVariant::Compact, black_box(area)))
    });
    group.bench_function("extended", |b| {
        b.iter(|| render(black_box(&content), LayoutVariant::Extended, black_box(area)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
