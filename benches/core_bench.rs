use casteljau_viewer::core::{
    flatten_to_segments, hovered_point, intermediates, FlattenConfig, StopCondition,
};
use casteljau_viewer::{Curve, Drawing, Point};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn build_control_polygon(point_count: usize) -> Vec<Point> {
    (0..point_count)
        .map(|i| {
            let x = i as f64 * 40.0;
            let base = if i % 2 == 0 { 0.0 } else { 120.0 };
            let y = base + (i as f64 * 0.37).sin() * 10.0;
            Point::new(x, y)
        })
        .collect()
}

fn build_drawing(curve_count: usize) -> Drawing {
    let curves = (0..curve_count)
        .map(|c| {
            let offset = Point::new(0.0, c as f64 * 150.0);
            Curve::from_points(build_control_polygon(4).into_iter().map(|p| p + offset).collect())
        })
        .collect();
    Drawing::from_curves(curves)
}

fn bench_intermediates(c: &mut Criterion) {
    let mut group = c.benchmark_group("intermediates");

    for &degree in &[3usize, 8, 16] {
        let points = build_control_polygon(degree + 1);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &points, |b, points| {
            b.iter(|| black_box(intermediates(black_box(points), 0.5).len()))
        });
    }

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    let cubic = build_control_polygon(4);

    for &depth in &[5u32, 10, 14] {
        let config = FlattenConfig::new(StopCondition::Depth { max_depth: depth });
        group.bench_with_input(BenchmarkId::new("depth", depth), &config, |b, config| {
            b.iter(|| black_box(flatten_to_segments(black_box(&cubic), config).len()))
        });
    }

    for &threshold in &[10.0f64, 1.0, 0.1] {
        let config = FlattenConfig::new(StopCondition::Distance { threshold });
        group.bench_with_input(
            BenchmarkId::new("distance", threshold),
            &config,
            |b, config| b.iter(|| black_box(flatten_to_segments(black_box(&cubic), config).len())),
        );
    }

    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let drawing = build_drawing(200);

    c.bench_function("hovered_point_200_curves", |b| {
        b.iter(|| black_box(hovered_point(&drawing, black_box(Point::new(81.0, 3001.0)), 5.0)))
    });
}

criterion_group!(core_benches, bench_intermediates, bench_flatten, bench_hover);
criterion_main!(core_benches);
