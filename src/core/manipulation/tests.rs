use super::*;
use approx::assert_relative_eq;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Kubik A (0..3) und verkettete Kubik B (0..3), Join bei (90, 90).
fn chained_cubics() -> Drawing {
    let mut drawing = Drawing::new();
    for point in [p(10.0, 10.0), p(20.0, 80.0), p(80.0, 20.0), p(90.0, 90.0)] {
        add_point(&mut drawing, point, false);
    }
    add_point(&mut drawing, p(150.0, 100.0), true);
    add_point(&mut drawing, p(200.0, 90.0), false);
    drawing
}

fn assert_join_intact(drawing: &Drawing, curve: usize) {
    let previous = &drawing.curves[curve - 1].points;
    let current = &drawing.curves[curve].points;
    assert_eq!(previous.last(), current.first(), "Join {curve} gebrochen");
}

// ── Einfügen ──

#[test]
fn test_add_point_to_empty_drawing_creates_curve() {
    let mut drawing = Drawing::new();
    let location = add_point(&mut drawing, p(1.0, 2.0), false);
    assert_eq!(location, PointLocation::new(0, 0));
    assert_eq!(drawing.curve_count(), 1);

    // Shift auf einer Kurve mit < 2 Punkten beginnt keine neue Kurve
    let location = add_point(&mut drawing, p(3.0, 4.0), true);
    assert_eq!(location, PointLocation::new(0, 1));
    assert_eq!(drawing.curve_count(), 1);
}

#[test]
fn test_add_point_after_clear_uses_empty_curve() {
    let mut drawing = Drawing::cleared();
    let location = add_point(&mut drawing, p(5.0, 5.0), false);
    assert_eq!(location, PointLocation::new(0, 0));
    assert_eq!(drawing.curve_count(), 1);
}

#[test]
fn test_new_curve_continues_tangent_of_cubic() {
    let drawing = chained_cubics();
    assert_eq!(drawing.curve_count(), 2);

    let second = &drawing.curves[1];
    assert!(second.chained);
    assert_eq!(second.points[0], p(90.0, 90.0));
    // Spiegelung von (80, 20) an (90, 90)
    assert_eq!(second.points[1], p(100.0, 160.0));
    assert_eq!(second.points[2], p(150.0, 100.0));
    assert_eq!(second.len(), 4);
}

#[test]
fn test_new_curve_after_line_has_no_tangent_point() {
    let mut drawing = Drawing::new();
    add_point(&mut drawing, p(0.0, 0.0), false);
    add_point(&mut drawing, p(10.0, 0.0), false);
    let location = add_point(&mut drawing, p(20.0, 5.0), true);

    assert_eq!(location, PointLocation::new(1, 1));
    assert_eq!(drawing.curves[1].points, vec![p(10.0, 0.0), p(20.0, 5.0)]);
}

// ── Verschieben ──

#[test]
fn test_move_plain_point_touches_nothing_else() {
    let mut drawing = chained_cubics();
    let before = drawing.clone();
    assert!(move_point(&mut drawing, PointLocation::new(0, 1), p(25.0, 70.0), false));

    assert_eq!(drawing.curves[0].points[1], p(25.0, 70.0));
    assert_eq!(drawing.curves[1], before.curves[1]);
    assert_eq!(drawing.curves[0].points[2], before.curves[0].points[2]);
}

#[test]
fn test_move_shared_end_point_translates_neighbours_rigidly() {
    let mut drawing = chained_cubics();
    let before = drawing.clone();
    let delta = Point::new(7.0, -3.0);

    assert!(move_point(
        &mut drawing,
        PointLocation::new(0, 3),
        p(90.0, 90.0) + delta,
        false
    ));

    assert_join_intact(&drawing, 1);
    assert_eq!(drawing.curves[1].points[0], p(97.0, 87.0));
    assert_eq!(drawing.curves[0].points[2], before.curves[0].points[2] + delta);
    assert_eq!(drawing.curves[1].points[1], before.curves[1].points[1] + delta);
    // Entferntere Punkte bleiben unverändert
    assert_eq!(drawing.curves[0].points[1], before.curves[0].points[1]);
    assert_eq!(drawing.curves[1].points[2], before.curves[1].points[2]);

    // Relative Offsets zum Join bleiben erhalten
    let offset_before = before.curves[1].points[1] - before.curves[1].points[0];
    let offset_after = drawing.curves[1].points[1] - drawing.curves[1].points[0];
    assert_relative_eq!(offset_before.x, offset_after.x);
    assert_relative_eq!(offset_before.y, offset_after.y);
}

#[test]
fn test_move_shared_start_point_is_symmetric() {
    let mut drawing = chained_cubics();
    let before = drawing.clone();
    let delta = Point::new(-4.0, 12.0);

    assert!(move_point(
        &mut drawing,
        PointLocation::new(1, 0),
        p(90.0, 90.0) + delta,
        false
    ));

    assert_join_intact(&drawing, 1);
    assert_eq!(drawing.curves[0].points[3], p(86.0, 102.0));
    assert_eq!(drawing.curves[0].points[2], before.curves[0].points[2] + delta);
    assert_eq!(drawing.curves[1].points[1], before.curves[1].points[1] + delta);
}

#[test]
fn test_move_join_of_lines_only_moves_endpoints() {
    let mut drawing = Drawing::new();
    add_point(&mut drawing, p(0.0, 0.0), false);
    add_point(&mut drawing, p(10.0, 0.0), false);
    add_point(&mut drawing, p(20.0, 0.0), true);

    assert!(move_point(&mut drawing, PointLocation::new(0, 1), p(10.0, 5.0), false));
    assert_eq!(drawing.curves[0].points, vec![p(0.0, 0.0), p(10.0, 5.0)]);
    assert_eq!(drawing.curves[1].points, vec![p(10.0, 5.0), p(20.0, 0.0)]);
}

#[test]
fn test_move_unchained_neighbour_is_independent() {
    let mut drawing = Drawing::from_curves(vec![
        Curve::from_points(vec![p(0.0, 0.0), p(10.0, 0.0)]),
        Curve::from_points(vec![p(10.0, 0.0), p(20.0, 0.0)]),
    ]);
    assert!(move_point(&mut drawing, PointLocation::new(0, 1), p(10.0, 9.0), true));
    assert_eq!(drawing.curves[1].points[0], p(10.0, 0.0));
}

#[test]
fn test_tangent_lock_reflects_following_control_point() {
    let mut drawing = chained_cubics();
    let target = p(70.0, 40.0);

    assert!(move_point(&mut drawing, PointLocation::new(0, 2), target, true));

    let shared = drawing.curves[0].points[3];
    let mirrored = drawing.curves[1].points[1];
    assert_relative_eq!(mirrored.x, shared.x + (shared.x - target.x));
    assert_relative_eq!(mirrored.y, shared.y + (shared.y - target.y));
    assert_eq!(mirrored, p(110.0, 140.0));
}

#[test]
fn test_tangent_lock_reflects_preceding_control_point() {
    let mut drawing = chained_cubics();
    let target = p(120.0, 130.0);

    assert!(move_point(&mut drawing, PointLocation::new(1, 1), target, true));

    assert_eq!(drawing.curves[0].points[2], p(60.0, 50.0));
    assert_join_intact(&drawing, 1);
}

#[test]
fn test_without_lock_opposite_control_point_stays() {
    let mut drawing = chained_cubics();
    let before = drawing.clone();
    assert!(move_point(&mut drawing, PointLocation::new(0, 2), p(70.0, 40.0), false));
    assert_eq!(drawing.curves[1].points[1], before.curves[1].points[1]);
}

#[test]
fn test_tangent_lock_quadratic_middle_point_serves_both_joins() {
    // Drei Quadriken: die mittlere hat ihren einzigen Kontrollpunkt an beiden Joins
    let mut drawing = Drawing::new();
    add_point(&mut drawing, p(0.0, 0.0), false);
    add_point(&mut drawing, p(10.0, 10.0), false);
    add_point(&mut drawing, p(20.0, 0.0), false);
    add_point(&mut drawing, p(40.0, 0.0), true);
    add_point(&mut drawing, p(60.0, 0.0), true);
    assert_eq!(drawing.curve_count(), 3);
    assert_eq!(drawing.curves[1].len(), 3);

    assert!(move_point(&mut drawing, PointLocation::new(1, 1), p(30.0, 4.0), true));
    assert_eq!(drawing.curves[0].points[1], p(10.0, -4.0));
    assert_eq!(drawing.curves[2].points[1], p(50.0, -4.0));
}

#[test]
fn test_move_invalid_location_is_noop() {
    let mut drawing = chained_cubics();
    let before = drawing.clone();
    assert!(!move_point(&mut drawing, PointLocation::new(9, 0), p(1.0, 1.0), true));
    assert!(!move_point(&mut drawing, PointLocation::new(0, 9), p(1.0, 1.0), true));
    assert_eq!(drawing, before);

    let mut empty = Drawing::new();
    assert!(!move_point(&mut empty, PointLocation::new(0, 0), p(1.0, 1.0), false));
}

// ── Löschen ──

#[test]
fn test_delete_last_point_of_single_line_empties_drawing() {
    let mut drawing = Drawing::new();
    add_point(&mut drawing, p(0.0, 0.0), false);
    add_point(&mut drawing, p(10.0, 10.0), false);

    assert!(delete_last_point(&mut drawing));
    assert_eq!(drawing.curve_count(), 0);
    assert!(!delete_last_point(&mut drawing));
    assert_eq!(drawing.curve_count(), 0);
}

#[test]
fn test_delete_last_point_shortens_curve() {
    let mut drawing = chained_cubics();
    assert!(delete_last_point(&mut drawing));
    assert_eq!(drawing.curves[1].len(), 3);
    assert_join_intact(&drawing, 1);
}

#[test]
fn test_delete_on_cleared_drawing_is_noop() {
    let mut drawing = Drawing::cleared();
    assert!(!delete_last_point(&mut drawing));
    assert_eq!(drawing, Drawing::cleared());
}

#[test]
fn test_delete_collapsing_chained_curve_keeps_predecessor() {
    let mut drawing = Drawing::new();
    add_point(&mut drawing, p(0.0, 0.0), false);
    add_point(&mut drawing, p(10.0, 0.0), false);
    add_point(&mut drawing, p(20.0, 0.0), true);

    assert!(delete_last_point(&mut drawing));
    assert_eq!(drawing.curve_count(), 1);
    assert_eq!(drawing.curves[0].points, vec![p(0.0, 0.0), p(10.0, 0.0)]);
}

#[test]
fn test_delete_shared_point_removes_both_copies() {
    let mut drawing = chained_cubics();
    assert!(delete_point(&mut drawing, PointLocation::new(0, 3)));

    assert_eq!(drawing.curve_count(), 2);
    assert_eq!(drawing.curves[0].len(), 3);
    assert_eq!(drawing.curves[1].len(), 3);
    assert!(!drawing.curves[1].chained);
    assert_eq!(drawing.curves[1].points[0], p(100.0, 160.0));
}

#[test]
fn test_delete_inner_point_of_middle_curve() {
    let mut drawing = chained_cubics();
    assert!(delete_point(&mut drawing, PointLocation::new(1, 2)));
    assert_eq!(drawing.curves[1].points, vec![p(90.0, 90.0), p(100.0, 160.0), p(200.0, 90.0)]);
    assert!(drawing.curves[1].chained);
}

#[test]
fn test_delete_removing_middle_curve_unchains_successor() {
    let mut drawing = Drawing::new();
    add_point(&mut drawing, p(0.0, 0.0), false);
    add_point(&mut drawing, p(10.0, 0.0), false);
    add_point(&mut drawing, p(20.0, 0.0), true);
    add_point(&mut drawing, p(30.0, 0.0), true);
    add_point(&mut drawing, p(40.0, 0.0), true);
    assert_eq!(drawing.curve_count(), 4);

    // Join (20,0) zwischen zwei Linien: beide kollabieren zu Einzelpunkten
    assert!(delete_point(&mut drawing, PointLocation::new(1, 1)));

    assert_eq!(drawing.curve_count(), 2);
    assert_eq!(drawing.curves[0].points, vec![p(0.0, 0.0), p(10.0, 0.0)]);
    assert_eq!(drawing.curves[1].points, vec![p(30.0, 0.0), p(40.0, 0.0)]);
    assert!(!drawing.curves[1].chained);
}

#[test]
fn test_delete_join_between_two_lines_drops_lone_points() {
    let mut drawing = Drawing::new();
    add_point(&mut drawing, p(0.0, 0.0), false);
    add_point(&mut drawing, p(10.0, 0.0), false);
    add_point(&mut drawing, p(20.0, 0.0), true);

    assert!(delete_point(&mut drawing, PointLocation::new(0, 1)));
    assert_eq!(drawing.curve_count(), 0);
}

#[test]
fn test_delete_invalid_location_is_noop() {
    let mut drawing = chained_cubics();
    let before = drawing.clone();
    assert!(!delete_point(&mut drawing, PointLocation::new(4, 0)));
    assert_eq!(drawing, before);
}

// ── Hover ──

#[test]
fn test_hovered_point_uses_strict_radius() {
    let drawing = chained_cubics();
    assert_eq!(
        hovered_point(&drawing, p(22.0, 81.0), 5.0),
        Some(PointLocation::new(0, 1))
    );
    assert_eq!(hovered_point(&drawing, p(25.0, 80.0), 5.0), None);
    assert_eq!(
        hovered_point(&drawing, p(24.9, 80.0), 5.0),
        Some(PointLocation::new(0, 1))
    );
}

#[test]
fn test_hovered_point_prefers_nearest_then_first() {
    let drawing = chained_cubics();
    // Join: beide Kopien gleich weit entfernt → erste Kurve gewinnt
    assert_eq!(
        hovered_point(&drawing, p(91.0, 90.0), 5.0),
        Some(PointLocation::new(0, 3))
    );
    assert_eq!(hovered_point(&Drawing::new(), p(0.0, 0.0), 5.0), None);
}
