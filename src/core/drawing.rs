//! Kurven-Topologie: Kurven als Punktfolgen, Zeichnung als Kurvenfolge.
//!
//! Jede Kurve besitzt ihre Punkte exklusiv. Eine mit `chained = true`
//! markierte Kurve teilt ihren ersten Punkt mit dem letzten Punkt der
//! Vorgänger-Kurve; beide Kopien werden von `manipulation` numerisch gleich
//! gehalten (Join als Relation, nicht als geteilte Referenz).

use super::geometry::Point;
use serde::{Deserialize, Serialize};

/// Start-Kurve einer neuen Sitzung (kubisch).
pub const SEED_CURVE: [Point; 4] = [
    Point::new(92.0, 298.0),
    Point::new(163.0, 130.0),
    Point::new(324.0, 114.0),
    Point::new(435.0, 291.0),
];

/// Eine Bézier-Kurve vom Grad `len − 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Kontrollpunkte in Reihenfolge
    pub points: Vec<Point>,
    /// Erster Punkt ist mit dem letzten Punkt der Vorgänger-Kurve verbunden
    #[serde(default)]
    pub chained: bool,
}

impl Curve {
    /// Leere, nicht verkettete Kurve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nicht verkettete Kurve aus den gegebenen Punkten.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            chained: false,
        }
    }

    /// Verkettete Kurve, die am geteilten Punkt beginnt.
    pub fn chained_at(shared: Point) -> Self {
        Self {
            points: vec![shared],
            chained: true,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grad der Kurve; `None` für weniger als 2 Punkte.
    pub fn degree(&self) -> Option<usize> {
        (self.points.len() >= 2).then(|| self.points.len() - 1)
    }

    /// True wenn die Kurve eine sichtbare Darstellung hat (≥ 2 Punkte).
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Position eines Punkts in der Zeichnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointLocation {
    /// Index der Kurve
    pub curve: usize,
    /// Index des Punkts innerhalb der Kurve
    pub index: usize,
}

impl PointLocation {
    pub fn new(curve: usize, index: usize) -> Self {
        Self { curve, index }
    }
}

/// Geordnete Folge von Kurven; die Reihenfolge bestimmt Z-Order und Verkettung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub curves: Vec<Curve>,
}

impl Drawing {
    /// Zeichnung ohne Kurven.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zustand nach "Leeren": genau eine leere Kurve.
    pub fn cleared() -> Self {
        Self {
            curves: vec![Curve::new()],
        }
    }

    /// Zeichnung mit der Start-Kurve.
    pub fn with_seed_curve() -> Self {
        Self::from_curves(vec![Curve::from_points(SEED_CURVE.to_vec())])
    }

    pub fn from_curves(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Gesamtzahl der Punkte (geteilte Endpunkte doppelt gezählt).
    pub fn point_count(&self) -> usize {
        self.curves.iter().map(Curve::len).sum()
    }

    pub fn curve(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// Punkt an einer Position, `None` wenn die Position nicht existiert.
    pub fn point(&self, location: PointLocation) -> Option<Point> {
        self.curves
            .get(location.curve)
            .and_then(|curve| curve.points.get(location.index))
            .copied()
    }

    /// Position des letzten Punkts der letzten Kurve.
    pub fn last_location(&self) -> Option<PointLocation> {
        let curve = self.curves.len().checked_sub(1)?;
        let index = self.curves[curve].len().checked_sub(1)?;
        Some(PointLocation::new(curve, index))
    }

    /// True wenn Kurve `index` ihren ersten Punkt mit der Vorgängerin teilt.
    pub fn joined_with_previous(&self, index: usize) -> bool {
        index > 0
            && self.curves.get(index).is_some_and(|c| c.chained && !c.is_empty())
            && self.curves.get(index - 1).is_some_and(|c| !c.is_empty())
    }

    /// True wenn Kurve `index` ihren letzten Punkt mit der Nachfolgerin teilt.
    pub fn joined_with_next(&self, index: usize) -> bool {
        self.joined_with_previous(index + 1)
    }

    /// Alle Punkte mit ihrer Position, in Zeichenreihenfolge.
    pub fn locations(&self) -> impl Iterator<Item = (PointLocation, Point)> + '_ {
        self.curves.iter().enumerate().flat_map(|(curve, c)| {
            c.points
                .iter()
                .enumerate()
                .map(move |(index, p)| (PointLocation::new(curve, index), *p))
        })
    }

    /// Rohdaten als JSON (Debug-Ausgabe, kein Speicherformat).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
