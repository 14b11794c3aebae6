//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::hovered_point;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasPressed { pos, shift } => {
            // Treffer auf bestehenden Punkt hat Vorrang vor dem Einfügen
            match hovered_point(&state.drawing, pos, state.options.hover_radius_px) {
                Some(location) => vec![AppCommand::BeginDrag { location }],
                None => vec![AppCommand::AddPoint {
                    pos,
                    start_new_curve: shift,
                }],
            }
        }
        AppIntent::PointerMoved { pos } => match state.interaction.dragging {
            Some(location) => vec![
                AppCommand::MoveTo {
                    location,
                    target: pos,
                    lock_tangents: state.options.lock_tangents,
                },
                AppCommand::UpdateHover { pos },
            ],
            None => vec![AppCommand::UpdateHover { pos }],
        },
        AppIntent::CanvasReleased => {
            if state.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::DeleteRequested => vec![AppCommand::DeleteSelectedPoint],
        AppIntent::ClearRequested => vec![AppCommand::ClearDrawing],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
