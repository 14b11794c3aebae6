//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let frame = state.last_frame;
            ui.label(format!("Segmente: {}", frame.segment_count));
            if frame.forced_segments > 0 {
                ui.label(
                    egui::RichText::new(format!("({} an Tiefengrenze)", frame.forced_segments))
                        .color(egui::Color32::YELLOW),
                );
            }

            ui.separator();
            ui.label(format!(
                "Kurven: {} | Punkte: {}",
                state.curve_count(),
                state.point_count()
            ));

            ui.separator();
            match state.command_log.last() {
                Some(command) => ui.label(format!(
                    "Befehle: {} (zuletzt: {})",
                    state.command_log.total(),
                    command.name()
                )),
                None => ui.label("Befehle: 0"),
            };

            if let Some(cursor) = state.interaction.cursor {
                ui.separator();
                ui.label(format!("Position: ({:.0}, {:.0})", cursor.x, cursor.y));
            }

            if let Some(ref msg) = state.render_error {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::RED));
            }
        });
    });
}
