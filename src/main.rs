//! Casteljau Viewer.
//!
//! Interaktiver Visualisierer für die Bézier-Unterteilung nach de Casteljau
//! mit egui.

use casteljau_viewer::{ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Casteljau Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 700.0])
                .with_title("Casteljau Viewer"),
            ..Default::default()
        };

        eframe::run_native(
            "Casteljau Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let options = ViewerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_options_panel(ctx, &self.state));

        let state = &mut self.state;
        let controller = &mut self.controller;
        let input = &mut self.input;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let origin = response.rect.min;

                events.extend(input.collect_canvas_events(ui, &response, origin));
                process_events(controller, state, std::mem::take(&mut events));

                // Vollständiger Neuaufbau nach allen Mutationen dieses Frames
                let mut canvas = ui::EguiCanvas::new(&painter, origin);
                controller.render(state, &mut canvas);
            });
    }
}

fn process_events(controller: &mut AppController, state: &mut AppState, events: Vec<AppIntent>) {
    for event in events {
        if let Err(e) = controller.handle_intent(state, event) {
            log::error!("Event handling failed: {:#}", e);
        }
    }
}
