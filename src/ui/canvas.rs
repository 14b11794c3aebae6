//! `Canvas`-Implementierung über einen egui-Painter.

use crate::core::Point;
use crate::render::Canvas;

/// Hintergrundfarbe der Zeichenfläche.
const BACKGROUND: egui::Color32 = egui::Color32::WHITE;

/// Konvertiert eine RGBA-Farbe (0..1) nach `Color32`.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet in den Clip-Bereich eines Painters; `origin` ist Canvas-(0, 0).
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    stroke: egui::Stroke,
    fill: egui::Color32,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            stroke: egui::Stroke::new(1.0, egui::Color32::BLACK),
            fill: egui::Color32::BLACK,
        }
    }

    fn to_screen(&self, point: Point) -> egui::Pos2 {
        self.origin + egui::vec2(point.x as f32, point.y as f32)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, BACKGROUND);
    }

    fn set_stroke(&mut self, color: [f32; 4], width: f32) {
        self.stroke = egui::Stroke::new(width, to_color32(color));
    }

    fn set_fill(&mut self, color: [f32; 4]) {
        self.fill = to_color32(color);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.painter.line_segment([self.to_screen(from), self.to_screen(to)], self.stroke);
    }

    fn fill_rect(&mut self, center: Point, size: f32) {
        let rect = egui::Rect::from_center_size(self.to_screen(center), egui::vec2(size, size));
        self.painter.rect_filled(rect, 0.0, self.fill);
    }
}

/// Konvertiert eine Bildschirmposition in Canvas-Koordinaten.
pub fn screen_to_canvas(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}
