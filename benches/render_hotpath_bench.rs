//! Benchmark für den Render-Hotpath.
//!
//! Misst einen kompletten Frame gegen ein aufzeichnendes Canvas:
//! - nur Segmente (Standard-Optionen)
//! - alle Hilfsgeometrie-Schalter aktiv

use casteljau_viewer::render::render_frame;
use casteljau_viewer::{Curve, Drawing, Point, RecordingCanvas, RenderScene, ViewerOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn build_drawing(curve_count: usize) -> Drawing {
    let curves = (0..curve_count)
        .map(|c| {
            let y = c as f64 * 20.0;
            Curve::from_points(vec![
                Point::new(0.0, y),
                Point::new(60.0, y + 80.0),
                Point::new(140.0, y - 60.0),
                Point::new(200.0, y),
            ])
        })
        .collect();
    Drawing::from_curves(curves)
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    let all_overlays = ViewerOptions {
        stop_condition: "BOUNDING_BOX".to_string(),
        threshold: 2.0,
        color_segments: true,
        show_construction: true,
        show_bounding_boxes: true,
        show_subdivision_points: true,
        ..ViewerOptions::default()
    };

    for &curve_count in &[1usize, 10, 100] {
        let drawing = Arc::new(build_drawing(curve_count));

        let plain = RenderScene::new(drawing.clone(), ViewerOptions::default());
        group.bench_with_input(
            BenchmarkId::new("plain", curve_count),
            &plain,
            |b, scene| {
                let mut canvas = RecordingCanvas::new();
                b.iter(|| {
                    canvas.reset();
                    let stats = render_frame(black_box(scene), &mut canvas);
                    black_box(stats.map(|s| s.segment_count))
                })
            },
        );

        let overlays = RenderScene::new(drawing, all_overlays.clone());
        group.bench_with_input(
            BenchmarkId::new("all_overlays", curve_count),
            &overlays,
            |b, scene| {
                let mut canvas = RecordingCanvas::new();
                b.iter(|| {
                    canvas.reset();
                    let stats = render_frame(black_box(scene), &mut canvas);
                    black_box(stats.map(|s| s.segment_count))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(render_benches, bench_render_frame);
criterion_main!(render_benches);
