//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        drawing: state.drawing.clone(),
        options: state.options.clone(),
        hovered: state.interaction.hovered,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::PointLocation;
    use std::sync::Arc;

    #[test]
    fn build_shares_drawing_and_copies_hover() {
        let mut state = AppState::new();
        state.interaction.hovered = Some(PointLocation::new(0, 1));

        let scene = build(&state);

        assert!(Arc::ptr_eq(&scene.drawing, &state.drawing));
        assert_eq!(scene.hovered, Some(PointLocation::new(0, 1)));
        assert_eq!(scene.options, state.options);
    }
}
