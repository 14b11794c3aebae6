//! Geometrie-Grundlagen: Punkt-Typ, Interpolation und Bounding-Box.

use glam::DVec2;

/// Kontrollpunkt in Canvas-Koordinaten (f64, Pixel).
pub type Point = DVec2;

/// Lineare Interpolation `(1 - t)·a + t·b`.
///
/// Liefert für `t = 0` und `t = 1` exakt die Endpunkte.
#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    (1.0 - t) * a + t * b
}

/// Punktspiegelung von `point` an `center`: `center + (center − point)`.
#[inline]
pub fn reflect(point: Point, center: Point) -> Point {
    center + (center - point)
}

/// Achsenparallele Bounding-Box über eine Punktmenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimale Ecke (kleinstes x, kleinstes y)
    pub min: Point,
    /// Maximale Ecke (größtes x, größtes y)
    pub max: Point,
}

impl BoundingBox {
    /// Berechnet die Box über alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            bbox.min = bbox.min.min(*p);
            bbox.max = bbox.max.max(*p);
        }
        Some(bbox)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Die vier Ecken im Uhrzeigersinn, beginnend bei `min`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// True wenn Breite und Höhe höchstens `size` betragen (inklusiv).
    pub fn fits_within(&self, size: f64) -> bool {
        self.width() <= size && self.height() <= size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(20.0, 80.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);

        let mid = lerp(a, b, 0.5);
        assert_relative_eq!(mid.x, 15.0);
        assert_relative_eq!(mid.y, 45.0);
    }

    #[test]
    fn test_reflect_through_center() {
        let reflected = reflect(Point::new(80.0, 20.0), Point::new(90.0, 90.0));
        assert_eq!(reflected, Point::new(100.0, 160.0));
        assert_eq!(reflect(reflected, Point::new(90.0, 90.0)), Point::new(80.0, 20.0));
    }

    #[test]
    fn test_bounding_box_over_points() {
        let points = [
            Point::new(10.0, 10.0),
            Point::new(20.0, 80.0),
            Point::new(80.0, 20.0),
            Point::new(90.0, 90.0),
        ];
        let bbox = BoundingBox::from_points(&points).expect("Box erwartet");
        assert_eq!(bbox.min, Point::new(10.0, 10.0));
        assert_eq!(bbox.max, Point::new(90.0, 90.0));
        assert_relative_eq!(bbox.width(), 80.0);
        assert_relative_eq!(bbox.height(), 80.0);
    }

    #[test]
    fn test_bounding_box_empty_and_single() {
        assert!(BoundingBox::from_points(&[]).is_none());

        let single = BoundingBox::from_points(&[Point::new(3.0, 4.0)]).expect("Box erwartet");
        assert_eq!(single.width(), 0.0);
        assert_eq!(single.height(), 0.0);
        assert!(single.fits_within(0.0));
    }

    #[test]
    fn test_fits_within_is_inclusive() {
        let bbox = BoundingBox {
            min: Point::new(0.0, 0.0),
            max: Point::new(5.0, 2.0),
        };
        assert!(bbox.fits_within(5.0));
        assert!(!bbox.fits_within(4.999));
    }
}
