// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vertical_cor::domain::comparison::{map_pointer, ComparisonSlider, ContainerSpan};
use vertical_cor::ui::comparison::cover_rect;

const SPAN: ContainerSpan = ContainerSpan::new(120.0, 960.0);

fn drag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison_drag");

    // One pointer sweep across the widget, as during a long drag.
    let sweep: Vec<f32> = (0..=1200).map(|step| step as f32).collect();

    group.bench_function("map_pointer_sweep", |b| {
        b.iter(|| {
            for &x in &sweep {
                black_box(map_pointer(black_box(x), SPAN));
            }
        });
    });

    group.bench_function("press_sweep_release", |b| {
        b.iter(|| {
            let mut slider = ComparisonSlider::new();
            slider.press(600.0, SPAN);
            for &x in &sweep {
                slider.pointer_moved(black_box(x), SPAN);
            }
            slider.release();
            black_box(slider.split())
        });
    });

    group.bench_function("cover_rect", |b| {
        let image = iced::Size::new(1470.0, 980.0);
        let area = iced::Size::new(960.0, 500.0);
        b.iter(|| black_box(cover_rect(black_box(image), black_box(area))));
    });

    group.finish();
}

criterion_group!(benches, drag_benchmark);
criterion_main!(benches);
