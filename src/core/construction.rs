//! Konstruktionsansicht: die de-Casteljau-Leiter einer Kurve bei festem `t`.

use super::geometry::Point;
use super::subdivision::intermediates;

/// Zwischenpunkt-Leiter einer Kurve für die Anzeige.
///
/// Reine Lesesicht auf die Geometrie; verändert die Zeichnung nicht.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionView {
    /// Kurvenparameter, bei dem die Leiter berechnet wurde
    pub parameter: f64,
    levels: Vec<Vec<Point>>,
}

impl ConstructionView {
    /// Baut die Leiter; `None` für Kurven mit weniger als 2 Punkten.
    pub fn build(points: &[Point], t: f64) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self {
            parameter: t,
            levels: intermediates(points, t),
        })
    }

    /// Alle Stufen; Stufe 0 ist das Kontrollpolygon.
    pub fn levels(&self) -> &[Vec<Point>] {
        &self.levels
    }

    /// Stufen oberhalb von 0, jeweils mit ihrem Index.
    pub fn construction_levels(&self) -> impl Iterator<Item = (usize, &[Point])> + '_ {
        self.levels
            .iter()
            .enumerate()
            .skip(1)
            .map(|(level, points)| (level, points.as_slice()))
    }

    /// Alle Konstruktionspunkte (Stufen > 0), inklusive Kurvenpunkt.
    pub fn construction_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.levels.iter().skip(1).flatten().copied()
    }

    /// Kurvenpunkt B(t): einziger Punkt der letzten Stufe.
    pub fn evaluated_point(&self) -> Point {
        // build() garantiert ≥ 2 Stufen, die letzte mit genau einem Punkt
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }
}
