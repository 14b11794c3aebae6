//! Unterteilungs-Engine nach de Casteljau.
//!
//! Enthält den Reduktionsschritt, die Zwischenpunkt-Leiter und die rekursive
//! Zerlegung einer Kurve in Liniensegmente mit austauschbarer Abbruchbedingung.
//!
//! Tiefenzählung: aufsteigend ab 0. Ein Segment trägt die Tiefe, auf der es
//! emittiert wurde.

use super::geometry::{lerp, BoundingBox, Point};
use std::str::FromStr;

/// Obergrenze der Rekursionstiefe, unabhängig von der Abbruchbedingung.
pub const DEFAULT_MAX_RECURSION_DEPTH: u32 = 16;
/// Harte Decke für jede konfigurierte Tiefengrenze (2^20 Segmente je Kurve).
pub const RECURSION_DEPTH_LIMIT: u32 = 20;

/// Konfigurationsfehler, die einen Render-Durchlauf abbrechen.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubdivisionError {
    /// Schlüssel der Abbruchbedingung ist unbekannt
    #[error("unbekannte Abbruchbedingung: {0:?}")]
    UnknownStopCondition(String),
    /// Distanz-/Größen-Schwellwert ist negativ oder keine Zahl
    #[error("ungültiger Schwellwert: {0} (erwartet: endliche Zahl >= 0)")]
    InvalidThreshold(f64),
    /// Konstruktions-Parameter liegt außerhalb von [0, 1]
    #[error("ungültiger Kurvenparameter: {0} (erwartet: 0 <= t <= 1)")]
    InvalidParameter(f64),
}

// ── Reduktion ───────────────────────────────────────────────────────

/// Ein de-Casteljau-Schritt: n Punkte → n−1 Punkte, je `(1−t)·p[i] + t·p[i+1]`.
///
/// Für n ≤ 1 ist das Ergebnis leer.
pub fn reduce(points: &[Point], t: f64) -> Vec<Point> {
    points
        .windows(2)
        .map(|pair| lerp(pair[0], pair[1], t))
        .collect()
}

/// Vollständige Zwischenpunkt-Leiter.
///
/// Stufe 0 ist die Eingabe, Stufe k ist `reduce(Stufe k−1, t)`. Die Leiter endet
/// mit der ersten Stufe der Länge ≤ 1; bei n ≥ 2 Eingabepunkten sind das genau
/// n Stufen, die letzte enthält den Kurvenpunkt B(t).
pub fn intermediates(points: &[Point], t: f64) -> Vec<Vec<Point>> {
    let mut ladder = Vec::with_capacity(points.len().max(1));
    ladder.push(points.to_vec());
    loop {
        let next = match ladder.last() {
            Some(level) if level.len() > 1 => reduce(level, t),
            _ => break,
        };
        ladder.push(next);
    }
    ladder
}

/// Teilt das Kontrollpolygon bei `t` in zwei Teilkurven.
///
/// Links: erster Punkt jeder Stufe. Rechts: letzter Punkt jeder Stufe, in
/// Kurvenrichtung geordnet (beginnt beim Teilungspunkt, endet beim Endpunkt).
pub fn split(points: &[Point], t: f64) -> (Vec<Point>, Vec<Point>) {
    let ladder = intermediates(points, t);
    let left = ladder
        .iter()
        .filter_map(|level| level.first().copied())
        .collect();
    let right = ladder
        .iter()
        .rev()
        .filter_map(|level| level.last().copied())
        .collect();
    (left, right)
}

// ── Abbruchbedingungen ──────────────────────────────────────────────

/// Art der Abbruchbedingung, wie sie in der Konfiguration benannt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopConditionKind {
    /// Feste Rekursionstiefe
    Depth,
    /// Abstand zwischen erstem und letztem Punkt
    Distance,
    /// Größe der Bounding-Box aller Punkte
    BoundingBox,
}

impl StopConditionKind {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [StopConditionKind; 3] = [Self::Depth, Self::Distance, Self::BoundingBox];

    /// Konfigurationsschlüssel.
    pub fn key(self) -> &'static str {
        match self {
            Self::Depth => "DEPTH",
            Self::Distance => "DISTANCE",
            Self::BoundingBox => "BOUNDING_BOX",
        }
    }

    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Depth => "Rekursionstiefe",
            Self::Distance => "Endpunkt-Abstand",
            Self::BoundingBox => "Bounding-Box-Größe",
        }
    }
}

impl FromStr for StopConditionKind {
    type Err = SubdivisionError;

    /// Groß-/Kleinschreibung wird ignoriert.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| SubdivisionError::UnknownStopCondition(s.to_string()))
    }
}

/// Aufgelöste Abbruchbedingung mit Parametern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopCondition {
    /// Stopp bei `depth == max_depth`
    Depth { max_depth: u32 },
    /// Stopp bei `distance(first, last) < threshold` (strikt)
    Distance { threshold: f64 },
    /// Stopp bei `width <= threshold && height <= threshold`
    BoundingBox { threshold: f64 },
}

impl StopCondition {
    /// Baut die Bedingung aus Konfigurationswerten.
    ///
    /// Der Schwellwert wird nur für Distanz/Bounding-Box geprüft.
    pub fn resolve(key: &str, max_depth: u32, threshold: f64) -> Result<Self, SubdivisionError> {
        let kind: StopConditionKind = key.parse()?;
        let checked_threshold = || {
            if threshold.is_finite() && threshold >= 0.0 {
                Ok(threshold)
            } else {
                Err(SubdivisionError::InvalidThreshold(threshold))
            }
        };
        Ok(match kind {
            StopConditionKind::Depth => Self::Depth { max_depth },
            StopConditionKind::Distance => Self::Distance {
                threshold: checked_threshold()?,
            },
            StopConditionKind::BoundingBox => Self::BoundingBox {
                threshold: checked_threshold()?,
            },
        })
    }

    pub fn kind(&self) -> StopConditionKind {
        match self {
            Self::Depth { .. } => StopConditionKind::Depth,
            Self::Distance { .. } => StopConditionKind::Distance,
            Self::BoundingBox { .. } => StopConditionKind::BoundingBox,
        }
    }
}

/// Parameter eines Flatten-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenConfig {
    /// Abbruchbedingung
    pub stop: StopCondition,
    /// Harte Tiefengrenze; greift auch bei Distanz/Bounding-Box
    pub max_recursion_depth: u32,
}

impl FlattenConfig {
    /// Konfiguration mit Standard-Tiefengrenze.
    pub fn new(stop: StopCondition) -> Self {
        Self {
            stop,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }

    /// Konfiguration mit eigener Tiefengrenze, gedeckelt auf [`RECURSION_DEPTH_LIMIT`].
    pub fn with_max_recursion_depth(stop: StopCondition, max_recursion_depth: u32) -> Self {
        if max_recursion_depth > RECURSION_DEPTH_LIMIT {
            log::warn!(
                "Tiefengrenze {} zu hoch, begrenzt auf {}",
                max_recursion_depth,
                RECURSION_DEPTH_LIMIT
            );
        }
        Self {
            stop,
            max_recursion_depth: max_recursion_depth.min(RECURSION_DEPTH_LIMIT),
        }
    }

    /// Tatsächlich wirksame Tiefengrenze.
    pub fn effective_max_depth(&self) -> u32 {
        self.max_recursion_depth.min(RECURSION_DEPTH_LIMIT)
    }
}

// ── Flatten ─────────────────────────────────────────────────────────

/// Ein emittiertes Liniensegment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Rekursionstiefe bei Emission
    pub depth: u32,
    /// True wenn die Tiefengrenze statt der Abbruchbedingung gegriffen hat
    pub forced: bool,
}

/// Empfänger für die Ausgaben eines Flatten-Durchlaufs.
///
/// Nur `segment` ist Pflicht; Bounding-Boxen und Teilungspunkte sind
/// Anzeige-Nebenprodukte ohne Einfluss auf den Kontrollfluss.
pub trait FlattenVisitor {
    /// Ein fertiges Segment.
    fn segment(&mut self, segment: &Segment);

    /// Bounding-Box, die bei `StopCondition::BoundingBox` ausgewertet wurde.
    fn bounding_box(&mut self, _bbox: &BoundingBox, _depth: u32) {}

    /// Teilungspunkt B(0.5) eines weiter unterteilten Polygons.
    fn split_point(&mut self, _point: Point, _depth: u32) {}
}

impl FlattenVisitor for Vec<Segment> {
    fn segment(&mut self, segment: &Segment) {
        self.push(*segment);
    }
}

/// Zähler eines Flatten-Durchlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Anzahl emittierter Segmente
    pub segments: usize,
    /// Davon durch die Tiefengrenze erzwungen
    pub forced_segments: usize,
    /// Größte erreichte Tiefe
    pub max_depth: u32,
}

impl FlattenStats {
    /// Addiert die Zähler eines weiteren Durchlaufs.
    pub fn merge(&mut self, other: FlattenStats) {
        self.segments += other.segments;
        self.forced_segments += other.forced_segments;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Zerlegt das Kontrollpolygon rekursiv in Segmente (Bisektion bei t = 0.5).
///
/// Polygone mit weniger als 2 Punkten erzeugen nichts.
pub fn flatten<V: FlattenVisitor + ?Sized>(
    points: &[Point],
    config: &FlattenConfig,
    visitor: &mut V,
) -> FlattenStats {
    let mut stats = FlattenStats::default();
    let cap = config.effective_max_depth();
    flatten_recursive(points, 0, cap, config, visitor, &mut stats);
    stats
}

/// Wie [`flatten`], sammelt die Segmente aber in einem Vec.
pub fn flatten_to_segments(points: &[Point], config: &FlattenConfig) -> Vec<Segment> {
    let mut segments = Vec::new();
    flatten(points, config, &mut segments);
    segments
}

fn flatten_recursive<V: FlattenVisitor + ?Sized>(
    points: &[Point],
    depth: u32,
    cap: u32,
    config: &FlattenConfig,
    visitor: &mut V,
    stats: &mut FlattenStats,
) {
    let [first, .., last] = points else {
        return;
    };

    let satisfied = match config.stop {
        StopCondition::Depth { max_depth } => depth == max_depth,
        StopCondition::Distance { threshold } => first.distance(*last) < threshold,
        StopCondition::BoundingBox { threshold } => {
            BoundingBox::from_points(points).map_or(true, |bbox| {
                visitor.bounding_box(&bbox, depth);
                bbox.fits_within(threshold)
            })
        }
    };
    let forced = !satisfied && depth >= cap;

    if satisfied || forced {
        visitor.segment(&Segment {
            from: *first,
            to: *last,
            depth,
            forced,
        });
        stats.segments += 1;
        if forced {
            stats.forced_segments += 1;
        }
        stats.max_depth = stats.max_depth.max(depth);
        return;
    }

    let (left, right) = split(points, 0.5);
    if let Some(split_at) = right.first() {
        visitor.split_point(*split_at, depth);
    }
    flatten_recursive(&left, depth + 1, cap, config, visitor, stats);
    flatten_recursive(&right, depth + 1, cap, config, visitor, stats);
}
