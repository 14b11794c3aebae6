//! Use-Cases: Punkte ziehen und Hover-Zustand pflegen.

use super::editing::refresh_hover;
use crate::app::AppState;
use crate::core::{manipulation, Point, PointLocation};
use std::sync::Arc;

/// Greift einen Punkt; er wird zugleich selektiert.
pub fn begin_drag(state: &mut AppState, location: PointLocation) {
    if state.drawing.point(location).is_none() {
        log::warn!("Ziehen ignoriert: Punkt {:?} existiert nicht", location);
        return;
    }
    state.interaction.dragging = Some(location);
    state.interaction.selected = Some(location);
    log::debug!("Ziehen begonnen: {:?}", location);
}

/// Verschiebt den gezogenen Punkt.
pub fn drag_to(state: &mut AppState, location: PointLocation, target: Point, lock_tangents: bool) {
    let drawing = Arc::make_mut(&mut state.drawing);
    if !manipulation::move_point(drawing, location, target, lock_tangents) {
        log::warn!("Verschieben ignoriert: Punkt {:?} existiert nicht", location);
        state.interaction.dragging = None;
    }
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    if let Some(location) = state.interaction.dragging.take() {
        log::debug!("Ziehen beendet: {:?}", location);
    }
}

/// Merkt die Zeigerposition und bestimmt den Hover-Punkt.
pub fn update_hover(state: &mut AppState, pos: Point) {
    state.interaction.cursor = Some(pos);
    refresh_hover(state);
}
