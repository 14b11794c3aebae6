//! Handler für Einfügen, Löschen und Leeren.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Hängt einen Punkt an die Zeichnung an.
pub fn add_point(state: &mut AppState, pos: Point, start_new_curve: bool) {
    use_cases::editing::add_point(state, pos, start_new_curve);
}

/// Löscht den selektierten oder letzten Punkt.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_point(state);
}

/// Leert die Zeichnung.
pub fn clear(state: &mut AppState) {
    use_cases::editing::clear_drawing(state);
}
