//! Toolbar mit Zeichen-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Leeren").clicked() {
                events.push(AppIntent::ClearRequested);
            }

            let delete_label = if state.interaction.selected.is_some() {
                "Auswahl löschen (Entf)"
            } else {
                "Letzten Punkt löschen (Entf)"
            };
            if ui
                .add_enabled(state.point_count() > 0, egui::Button::new(delete_label))
                .clicked()
            {
                events.push(AppIntent::DeleteRequested);
            }

            ui.separator();
            ui.label("Klick: Punkt anhängen | Shift+Klick: neue Kurve | Ziehen: Punkt verschieben");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
