//! Handler für Zeiger-Interaktion: Ziehen und Hover.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Point, PointLocation};

pub fn begin_drag(state: &mut AppState, location: PointLocation) {
    use_cases::drag::begin_drag(state, location);
}

pub fn move_to(state: &mut AppState, location: PointLocation, target: Point, lock_tangents: bool) {
    use_cases::drag::drag_to(state, location, target, lock_tangents);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

pub fn update_hover(state: &mut AppState, pos: Point) {
    use_cases::drag::update_hover(state, pos);
}
