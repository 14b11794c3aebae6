//! Punkt-Manipulation: Einfügen, Verschieben, Löschen und Hover-Test.
//!
//! Alle Operationen schreiben direkt in die Zeichnung und halten dabei die
//! Join-Invariante verketteter Kurven ein: letzter Punkt von Kurve i−1 und
//! erster Punkt von Kurve i sind numerisch gleich. Ungültige Positionen sind
//! stille No-Ops.

use super::drawing::{Curve, Drawing, PointLocation};
use super::geometry::{reflect, Point};

/// Hängt einen Punkt an die letzte Kurve an.
///
/// Mit `start_new_curve` und mindestens 2 Punkten in der letzten Kurve wird
/// zuerst eine verkettete Kurve begonnen: Kopie des geteilten Endpunkts und,
/// ab Grad 2 der Vorgängerin, der gespiegelte vorletzte Kontrollpunkt als
/// Start-Tangente. Ohne Kurven wird eine leere Kurve angelegt.
pub fn add_point(drawing: &mut Drawing, point: Point, start_new_curve: bool) -> PointLocation {
    if drawing.curves.is_empty() {
        drawing.curves.push(Curve::new());
    }

    if start_new_curve {
        let continuation = drawing
            .curves
            .last()
            .filter(|curve| curve.len() >= 2)
            .map(|previous| {
                let n = previous.len();
                let shared = previous.points[n - 1];
                let mut next = Curve::chained_at(shared);
                if n >= 3 {
                    next.points.push(reflect(previous.points[n - 2], shared));
                }
                next
            });
        if let Some(next) = continuation {
            drawing.curves.push(next);
        }
    }

    let curve_index = drawing.curves.len() - 1;
    let curve = &mut drawing.curves[curve_index];
    curve.points.push(point);
    PointLocation::new(curve_index, curve.len() - 1)
}

/// Verschiebt den Punkt an `location` nach `target`.
///
/// 1. Erster Punkt einer verketteten Kurve: letzter Punkt der Vorgängerin folgt,
///    die benachbarten Kontrollpunkte beider Seiten (ab Grad 2) werden um dasselbe
///    Delta verschoben.
/// 2. Letzter Punkt vor einer verketteten Nachfolgerin: symmetrisch.
/// 3. Mit `lock_tangents`: Wird der Kontrollpunkt neben einem Join bewegt, wird der
///    gegenüberliegende Kontrollpunkt als Spiegelung am Join-Punkt neu gesetzt.
///
/// Gibt `false` zurück, wenn die Position nicht existiert.
pub fn move_point(
    drawing: &mut Drawing,
    location: PointLocation,
    target: Point,
    lock_tangents: bool,
) -> bool {
    let Some(old) = drawing.point(location) else {
        return false;
    };
    let PointLocation { curve: c, index: i } = location;
    let delta = target - old;
    let len = drawing.curves[c].len();
    let curved = has_handles(&drawing.curves[c]);
    let joined_prev = drawing.joined_with_previous(c);
    let joined_next = drawing.joined_with_next(c);

    drawing.curves[c].points[i] = target;

    if i == 0 && joined_prev {
        if curved {
            drawing.curves[c].points[1] += delta;
        }
        let previous = &mut drawing.curves[c - 1];
        let previous_curved = has_handles(previous);
        let last = previous.len() - 1;
        previous.points[last] = target;
        if previous_curved {
            previous.points[last - 1] += delta;
        }
    }

    if i + 1 == len && joined_next {
        if curved {
            drawing.curves[c].points[len - 2] += delta;
        }
        let next = &mut drawing.curves[c + 1];
        next.points[0] = target;
        if has_handles(next) {
            next.points[1] += delta;
        }
    }

    if lock_tangents && curved {
        if i == 1 && joined_prev {
            let shared = drawing.curves[c].points[0];
            let previous = &mut drawing.curves[c - 1];
            if has_handles(previous) {
                let k = previous.len() - 2;
                previous.points[k] = reflect(target, shared);
            }
        }
        if i + 2 == len && joined_next {
            let shared = drawing.curves[c].points[len - 1];
            let next = &mut drawing.curves[c + 1];
            if has_handles(next) {
                next.points[1] = reflect(target, shared);
            }
        }
    }

    true
}

/// Kurven ab Grad 2 haben Tangentenpunkte neben ihren Endpunkten.
fn has_handles(curve: &Curve) -> bool {
    curve.degree().is_some_and(|degree| degree >= 2)
}

/// Löscht den Punkt an `location`.
///
/// Ist der Punkt ein geteilter Endpunkt, wird auch seine Kopie in der
/// Nachbar-Kurve entfernt und der Join aufgelöst. Kurven mit nur noch einem
/// Punkt verlieren diesen; leer gewordene Kurven werden entfernt.
///
/// Gibt `false` zurück, wenn die Position nicht existiert.
pub fn delete_point(drawing: &mut Drawing, location: PointLocation) -> bool {
    if drawing.point(location).is_none() {
        return false;
    }
    let PointLocation { curve: c, index: i } = location;
    let len = drawing.curves[c].len();
    let joined_prev = drawing.joined_with_previous(c);
    let joined_next = drawing.joined_with_next(c);

    drawing.curves[c].points.remove(i);
    let mut touched = vec![c];

    if i == 0 && joined_prev {
        drawing.curves[c - 1].points.pop();
        drawing.curves[c].chained = false;
        touched.push(c - 1);
    }
    if i + 1 == len && joined_next {
        drawing.curves[c + 1].points.remove(0);
        drawing.curves[c + 1].chained = false;
        touched.push(c + 1);
    }

    for &index in &touched {
        let curve = &mut drawing.curves[index];
        if curve.len() == 1 {
            curve.points.clear();
        }
    }

    touched.sort_unstable_by(|a, b| b.cmp(a));
    for index in touched {
        if !drawing.curves[index].is_empty() {
            continue;
        }
        drawing.curves.remove(index);
        if let Some(successor) = drawing.curves.get_mut(index) {
            successor.chained = false;
        }
    }

    true
}

/// Löscht den letzten Punkt der letzten Kurve.
pub fn delete_last_point(drawing: &mut Drawing) -> bool {
    match drawing.last_location() {
        Some(location) => delete_point(drawing, location),
        None => false,
    }
}

/// Nächster Punkt mit Abstand strikt kleiner als `radius`.
///
/// Bei gleichem Abstand gewinnt der zuerst gezeichnete Punkt.
pub fn hovered_point(drawing: &Drawing, cursor: Point, radius: f64) -> Option<PointLocation> {
    let mut best: Option<(PointLocation, f64)> = None;
    for (location, point) in drawing.locations() {
        let distance = point.distance(cursor);
        if distance >= radius {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((location, distance));
        }
    }
    best.map(|(location, _)| location)
}

#[cfg(test)]
mod tests;
