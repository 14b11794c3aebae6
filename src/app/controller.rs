//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::render::{render_frame, Canvas, FrameStats};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let sequence = state.command_log.record(&command);
        log::debug!("Command #{}: {}", sequence, command.name());
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::AddPoint {
                pos,
                start_new_curve,
            } => handlers::editing::add_point(state, pos, start_new_curve),
            AppCommand::DeleteSelectedPoint => handlers::editing::delete_selected(state),
            AppCommand::ClearDrawing => handlers::editing::clear(state),

            // === Zeiger ===
            AppCommand::BeginDrag { location } => handlers::pointer::begin_drag(state, location),
            AppCommand::MoveTo {
                location,
                target,
                lock_tangents,
            } => handlers::pointer::move_to(state, location, target, lock_tangents),
            AppCommand::EndDrag => handlers::pointer::end_drag(state),
            AppCommand::UpdateHover { pos } => handlers::pointer::update_hover(state, pos),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Zeichnet einen Frame und merkt Zähler bzw. Fehler im State.
    ///
    /// Ein fehlgeschlagener Frame setzt den Segmentzähler auf 0; derselbe
    /// Fehler wird nur beim ersten Auftreten geloggt.
    pub fn render<C: Canvas + ?Sized>(&self, state: &mut AppState, canvas: &mut C) -> FrameStats {
        let scene = self.build_render_scene(state);
        match render_frame(&scene, canvas) {
            Ok(stats) => {
                if state.render_error.take().is_some() {
                    log::info!("Rendering wieder fehlerfrei");
                }
                state.last_frame = stats;
            }
            Err(e) => {
                let message = e.to_string();
                if state.render_error.as_deref() != Some(message.as_str()) {
                    log::error!("Render-Durchlauf abgebrochen: {}", message);
                }
                state.render_error = Some(message);
                state.last_frame = FrameStats::default();
            }
        }
        state.last_frame
    }
}
