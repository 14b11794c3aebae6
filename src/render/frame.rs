//! Ein kompletter Frame: Kontrollpunkte, Kurvensegmente, Hilfsgeometrie.

use super::canvas::Canvas;
use crate::core::{
    flatten, BoundingBox, ConstructionView, Curve, FlattenConfig, FlattenStats, FlattenVisitor,
    Point, PointLocation, Segment, StopConditionKind, SubdivisionError,
};
use crate::shared::{RenderScene, ViewerOptions};

/// Diagnose-Zähler des letzten Frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Emittierte Segmente über alle Kurven
    pub segment_count: usize,
    /// Davon durch die Tiefengrenze erzwungen
    pub forced_segments: usize,
    /// Kurven mit mindestens 2 Punkten
    pub curves_drawn: usize,
}

/// Zeichnet die Szene vollständig neu.
///
/// Reihenfolge je Kurve: Kontrollpunkte, Segmente, Bounding-Boxen,
/// Teilungspunkte, Konstruktionsansicht. Konfigurationsfehler brechen den
/// Frame nach dem Löschen der Fläche ab.
pub fn render_frame<C: Canvas + ?Sized>(
    scene: &RenderScene,
    canvas: &mut C,
) -> Result<FrameStats, SubdivisionError> {
    canvas.clear();

    let options = &scene.options;
    let config = options.flatten_config()?;
    let construction_t = if options.show_construction {
        Some(options.checked_construction_parameter()?)
    } else {
        None
    };

    let mut stats = FrameStats::default();
    let mut totals = FlattenStats::default();
    let mut segment_index = 0usize;

    for (curve_index, curve) in scene.drawing.curves.iter().enumerate() {
        if options.show_control_points {
            draw_control_points(canvas, options, curve, curve_index, scene.hovered);
        }

        if !curve.is_drawable() {
            continue;
        }
        stats.curves_drawn += 1;

        totals.merge(draw_curve(canvas, options, &config, curve, curve_index, &mut segment_index));

        if let Some(t) = construction_t {
            if let Some(view) = ConstructionView::build(&curve.points, t) {
                draw_construction(canvas, options, &view);
            }
        }
    }

    stats.segment_count = totals.segments;
    stats.forced_segments = totals.forced_segments;

    log::trace!(
        "Frame: {} Segmente ({} erzwungen, Tiefe bis {}), {} Kurven",
        stats.segment_count,
        stats.forced_segments,
        totals.max_depth,
        stats.curves_drawn
    );
    Ok(stats)
}

// ── Kontrollpunkte ──────────────────────────────────────────────────

fn draw_control_points<C: Canvas + ?Sized>(
    canvas: &mut C,
    options: &ViewerOptions,
    curve: &Curve,
    curve_index: usize,
    hovered: Option<PointLocation>,
) {
    canvas.set_fill(options.color_default);
    for (index, point) in curve.points.iter().enumerate() {
        let size = if hovered == Some(PointLocation::new(curve_index, index)) {
            options.point_size_hovered
        } else {
            options.point_size
        };
        canvas.fill_rect(*point, size);
    }
}

// ── Kurve ───────────────────────────────────────────────────────────

/// Zeichnet Segmente direkt, sammelt Boxen und Teilungspunkte für danach.
struct SegmentPainter<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    options: &'a ViewerOptions,
    curve_color: [f32; 4],
    segment_index: &'a mut usize,
    boxes: Vec<BoundingBox>,
    splits: Vec<(Point, u32)>,
}

impl<C: Canvas + ?Sized> FlattenVisitor for SegmentPainter<'_, C> {
    fn segment(&mut self, segment: &Segment) {
        let color = if self.options.color_segments {
            self.options.palette_color(*self.segment_index)
        } else {
            self.curve_color
        };
        *self.segment_index += 1;
        self.canvas.set_stroke(color, self.options.curve_line_width);
        self.canvas.draw_line(segment.from, segment.to);
    }

    fn bounding_box(&mut self, bbox: &BoundingBox, _depth: u32) {
        if self.options.show_bounding_boxes {
            self.boxes.push(*bbox);
        }
    }

    fn split_point(&mut self, point: Point, depth: u32) {
        if self.options.show_subdivision_points {
            self.splits.push((point, depth));
        }
    }
}

fn draw_curve<C: Canvas + ?Sized>(
    canvas: &mut C,
    options: &ViewerOptions,
    config: &FlattenConfig,
    curve: &Curve,
    curve_index: usize,
    segment_index: &mut usize,
) -> FlattenStats {
    let curve_color = if options.color_curves {
        options.palette_color(curve_index)
    } else {
        options.color_default
    };

    let mut painter = SegmentPainter {
        canvas: &mut *canvas,
        options,
        curve_color,
        segment_index,
        boxes: Vec::new(),
        splits: Vec::new(),
    };
    let stats = flatten(&curve.points, config, &mut painter);
    let SegmentPainter { boxes, splits, .. } = painter;

    if config.stop.kind() == StopConditionKind::BoundingBox {
        canvas.set_stroke(options.color_bounding_box, options.helper_line_width);
        for bbox in &boxes {
            let [a, b, c, d] = bbox.corners();
            for (from, to) in [(a, b), (b, c), (c, d), (d, a)] {
                canvas.draw_line(from, to);
            }
        }
    }

    for (point, depth) in splits {
        canvas.set_fill(options.palette_color(depth as usize));
        canvas.fill_rect(point, options.point_size);
    }

    stats
}

// ── Konstruktion ────────────────────────────────────────────────────

fn draw_construction<C: Canvas + ?Sized>(
    canvas: &mut C,
    options: &ViewerOptions,
    view: &ConstructionView,
) {
    if let Some(polygon) = view.levels().first() {
        draw_polyline(canvas, polygon, options.palette_color(1), options.helper_line_width);
    }
    for (level, points) in view.construction_levels() {
        let color = options.palette_color(level + 1);
        draw_polyline(canvas, points, color, options.helper_line_width);
    }

    canvas.set_fill(options.color_construction_point);
    for point in view.construction_points() {
        canvas.fill_rect(point, options.point_size);
    }

    canvas.set_fill(options.color_evaluated_point);
    canvas.fill_rect(view.evaluated_point(), options.evaluated_point_size);
}

fn draw_polyline<C: Canvas + ?Sized>(
    canvas: &mut C,
    points: &[Point],
    color: [f32; 4],
    width: f32,
) {
    canvas.set_stroke(color, width);
    for pair in points.windows(2) {
        canvas.draw_line(pair[0], pair[1]);
    }
}
