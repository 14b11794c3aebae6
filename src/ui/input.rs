//! Canvas-Input-Handling: Maus und Tastatur → AppIntent.

use super::canvas::screen_to_canvas;
use crate::app::AppIntent;

/// Verwaltet den Input-Zustand der Zeichenfläche
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Zeigerposition (Bildschirm)
    last_pointer: Option<egui::Pos2>,
    /// Primärtaste wurde über der Zeichenfläche gedrückt
    pressed_on_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `origin` ist die Bildschirmposition des Canvas-Ursprungs.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        origin: egui::Pos2,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (latest, pressed, released, shift, delete) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.modifiers.shift,
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            )
        });

        // ── Zeigerbewegung ──
        if let Some(pos) = latest {
            let over_canvas = response.contains_pointer() || self.pressed_on_canvas;
            if over_canvas && self.last_pointer != Some(pos) {
                self.last_pointer = Some(pos);
                events.push(AppIntent::PointerMoved {
                    pos: screen_to_canvas(pos, origin),
                });
            }
        }

        // ── Drücken ──
        if pressed && response.contains_pointer() {
            let press_pos = ui.input(|i| i.pointer.press_origin()).or(latest);
            if let Some(pos) = press_pos {
                self.pressed_on_canvas = true;
                events.push(AppIntent::CanvasPressed {
                    pos: screen_to_canvas(pos, origin),
                    shift,
                });
            }
        }

        // ── Loslassen ──
        if released && self.pressed_on_canvas {
            self.pressed_on_canvas = false;
            events.push(AppIntent::CanvasReleased);
        }

        // ── Tastatur ──
        if delete && !ui.ctx().wants_keyboard_input() {
            events.push(AppIntent::DeleteRequested);
        }

        events
    }
}
