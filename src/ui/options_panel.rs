//! Seitenpanel mit allen Viewer-Optionen.

use super::canvas::to_color32;
use crate::app::{AppIntent, AppState};
use crate::core::{StopConditionKind, RECURSION_DEPTH_LIMIT};
use crate::shared::ViewerOptions;

/// Zeigt das Optionen-Panel und gibt erzeugte Events zurück.
///
/// Änderungen werden sofort als `OptionsChanged` gemeldet.
pub fn render_options_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::SidePanel::right("options_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Unterteilung");
                changed |= subdivision_section(ui, &mut opts);

                ui.separator();
                ui.heading("Anzeige");
                changed |= display_section(ui, &mut opts);

                ui.separator();
                ui.heading("Interaktion");
                changed |= ui
                    .checkbox(&mut opts.lock_tangents, "Tangenten an Joins koppeln")
                    .changed();
                ui.horizontal(|ui| {
                    ui.label("Hover-Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.hover_radius_px)
                                .range(1.0..=30.0)
                                .speed(0.5),
                        )
                        .changed();
                });

                ui.separator();
                ui.collapsing("Stil", |ui| {
                    changed |= style_section(ui, &mut opts);
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Speichern").clicked() {
                        events.push(AppIntent::SaveOptionsRequested);
                    }
                    if ui.button("Standardwerte").clicked() {
                        events.push(AppIntent::ResetOptionsRequested);
                    }
                });
            });
        });

    if changed {
        events.insert(0, AppIntent::OptionsChanged { options: opts });
    }

    events
}

// ── Abschnitte ──────────────────────────────────────────────────────

fn subdivision_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;
    let current = opts.stop_condition_kind();
    let selected_text = current
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| format!("unbekannt: {}", opts.stop_condition));

    ui.horizontal(|ui| {
        ui.label("Abbruch:");
        egui::ComboBox::from_id_salt("stop_condition")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for kind in StopConditionKind::ALL {
                    if ui
                        .selectable_label(current == Some(kind), kind.label())
                        .clicked()
                    {
                        opts.set_stop_condition(kind);
                        changed = true;
                    }
                }
            });
    });

    let is_depth = current == Some(StopConditionKind::Depth);
    ui.add_enabled_ui(is_depth, |ui| {
        changed |= ui
            .add(egui::Slider::new(&mut opts.depth, 0..=12).text("Tiefe"))
            .changed();
    });
    ui.add_enabled_ui(!is_depth, |ui| {
        changed |= ui
            .add(
                egui::Slider::new(&mut opts.threshold, 0.5..=100.0)
                    .logarithmic(true)
                    .text("Schwellwert (px)"),
            )
            .changed();
    });
    changed |= ui
        .add(
            egui::Slider::new(&mut opts.max_recursion_depth, 0..=RECURSION_DEPTH_LIMIT)
                .text("Tiefengrenze"),
        )
        .changed();

    changed
}

fn display_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;
    changed |= ui
        .checkbox(&mut opts.show_control_points, "Kontrollpunkte")
        .changed();
    changed |= ui.checkbox(&mut opts.color_curves, "Kurven einfärben").changed();
    changed |= ui
        .checkbox(&mut opts.color_segments, "Segmente einfärben")
        .changed();
    changed |= ui
        .checkbox(&mut opts.show_subdivision_points, "Teilungspunkte")
        .changed();
    changed |= ui
        .checkbox(&mut opts.show_bounding_boxes, "Bounding-Boxen")
        .changed();
    changed |= ui
        .checkbox(&mut opts.show_construction, "Konstruktion")
        .changed();

    let show_construction = opts.show_construction;
    ui.add_enabled_ui(show_construction, |ui| {
        changed |= ui
            .add(egui::Slider::new(&mut opts.construction_parameter, 0.0..=1.0).text("t"))
            .changed();
    });

    changed
}

fn style_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Linienbreite Kurve:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut opts.curve_line_width)
                    .range(0.5..=8.0)
                    .speed(0.1),
            )
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Linienbreite Hilfslinien:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut opts.helper_line_width)
                    .range(0.2..=4.0)
                    .speed(0.05),
            )
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Punktgröße:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut opts.point_size)
                    .range(1.0..=16.0)
                    .speed(0.1),
            )
            .changed();
    });

    changed |= color_edit(ui, "Standardfarbe:", &mut opts.color_default);
    changed |= color_edit(ui, "Bounding-Box:", &mut opts.color_bounding_box);
    changed |= color_edit(ui, "Konstruktionspunkte:", &mut opts.color_construction_point);
    changed |= color_edit(ui, "Kurvenpunkt:", &mut opts.color_evaluated_point);

    ui.label("Palette:");
    ui.horizontal_wrapped(|ui| {
        for color in opts.palette.iter_mut() {
            changed |= color_button(ui, color);
        }
    });

    changed
}

// ── Farbwahl ────────────────────────────────────────────────────────

fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = color_button(ui, color);
    });
    changed
}

fn color_button(ui: &mut egui::Ui, color: &mut [f32; 4]) -> bool {
    let mut c = to_color32(*color);
    if ui.color_edit_button_srgba(&mut c).changed() {
        color[0] = c.r() as f32 / 255.0;
        color[1] = c.g() as f32 / 255.0;
        color[2] = c.b() as f32 / 255.0;
        color[3] = c.a() as f32 / 255.0;
        return true;
    }
    false
}
