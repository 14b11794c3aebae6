//! Zeichenfläche als Trait: der Frame-Renderer kennt nur diese Primitive.

use crate::core::Point;

/// Minimale Zeichen-API mit aktueller Strich- und Füllfarbe.
///
/// Koordinaten sind Canvas-Pixel, identisch mit den Eingabe-Koordinaten.
pub trait Canvas {
    /// Löscht die gesamte Fläche.
    fn clear(&mut self);

    /// Setzt Farbe (RGBA) und Breite für folgende Linien.
    fn set_stroke(&mut self, color: [f32; 4], width: f32);

    /// Setzt die Farbe (RGBA) für folgende gefüllte Rechtecke.
    fn set_fill(&mut self, color: [f32; 4]);

    /// Zeichnet eine Linie mit dem aktuellen Strich.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Füllt ein achsenparalleles Quadrat der Kantenlänge `size` um `center`.
    fn fill_rect(&mut self, center: Point, size: f32);
}

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Line {
        from: Point,
        to: Point,
        color: [f32; 4],
        width: f32,
    },
    Rect {
        center: Point,
        size: f32,
        color: [f32; 4],
    },
}

/// Canvas ohne Ausgabe, das alle Befehle mit aufgelöstem Stil protokolliert.
///
/// Für Tests, Benchmarks und Headless-Durchläufe.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
    stroke: ([f32; 4], f32),
    fill: [f32; 4],
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            stroke: ([0.0, 0.0, 0.0, 1.0], 1.0),
            fill: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Befehle seit dem Anlegen.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Befehle nach dem letzten `clear`.
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| *call == DrawCall::Clear)
            .map_or(0, |index| index + 1);
        &self.calls[start..]
    }

    /// Linien des letzten Frames mit ihrer Farbe.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, [f32; 4])> + '_ {
        self.last_frame().iter().filter_map(|call| match call {
            DrawCall::Line {
                from, to, color, ..
            } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    /// Gefüllte Rechtecke des letzten Frames.
    pub fn rects(&self) -> impl Iterator<Item = (Point, f32, [f32; 4])> + '_ {
        self.last_frame().iter().filter_map(|call| match call {
            DrawCall::Rect {
                center,
                size,
                color,
            } => Some((*center, *size, *color)),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_stroke(&mut self, color: [f32; 4], width: f32) {
        self.stroke = (color, width);
    }

    fn set_fill(&mut self, color: [f32; 4]) {
        self.fill = color;
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let (color, width) = self.stroke;
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_rect(&mut self, center: Point, size: f32) {
        self.calls.push(DrawCall::Rect {
            center,
            size,
            color: self.fill,
        });
    }
}
