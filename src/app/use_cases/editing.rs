//! Use-Cases: Punkte einfügen, löschen und die Zeichnung leeren.

use crate::app::AppState;
use crate::core::{manipulation, Drawing, Point};
use std::sync::Arc;

/// Hängt einen Punkt an und selektiert ihn.
pub fn add_point(state: &mut AppState, pos: Point, start_new_curve: bool) {
    let drawing = Arc::make_mut(&mut state.drawing);
    let location = manipulation::add_point(drawing, pos, start_new_curve);

    state.interaction.selected = Some(location);
    log::info!(
        "Punkt ({:.1}, {:.1}) hinzugefügt: Kurve {}, Index {}{}",
        pos.x,
        pos.y,
        location.curve,
        location.index,
        if start_new_curve { " (neue Kurve)" } else { "" }
    );
}

/// Löscht den selektierten Punkt; ohne gültige Selektion den letzten Punkt.
pub fn delete_selected_point(state: &mut AppState) {
    let selected = state
        .interaction
        .selected
        .filter(|location| state.drawing.point(*location).is_some());

    let drawing = Arc::make_mut(&mut state.drawing);
    let deleted = match selected {
        Some(location) => manipulation::delete_point(drawing, location),
        None => manipulation::delete_last_point(drawing),
    };

    if !deleted {
        log::warn!("Löschen ignoriert: keine Punkte vorhanden");
        return;
    }

    state.interaction.forget_locations();
    refresh_hover(state);
    log::info!(
        "Punkt gelöscht ({} Kurven, {} Punkte)",
        state.drawing.curve_count(),
        state.drawing.point_count()
    );
}

/// Protokolliert die Zeichnung als JSON und setzt sie auf eine leere Kurve zurück.
pub fn clear_drawing(state: &mut AppState) {
    match state.drawing.to_json() {
        Ok(json) => log::info!("Zeichnung vor dem Leeren: {}", json),
        Err(e) => log::warn!("Zeichnung konnte nicht serialisiert werden: {}", e),
    }

    state.drawing = Arc::new(Drawing::cleared());
    state.interaction.forget_locations();
    log::info!("Zeichnung geleert");
}

/// Bestimmt den Hover-Punkt an der letzten Zeigerposition neu.
pub fn refresh_hover(state: &mut AppState) {
    state.interaction.hovered = state.interaction.cursor.and_then(|cursor| {
        manipulation::hovered_point(&state.drawing, cursor, state.options.hover_radius_px)
    });
}
