//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Drawing, Point, PointLocation};
use crate::render::FrameStats;
use crate::shared::ViewerOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Zeiger- und Auswahlzustand auf der Zeichenfläche
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Letzte bekannte Zeigerposition
    pub cursor: Option<Point>,
    /// Punkt unter dem Zeiger
    pub hovered: Option<PointLocation>,
    /// Zuletzt hinzugefügter oder gegriffener Punkt
    pub selected: Option<PointLocation>,
    /// Aktuell gezogener Punkt
    pub dragging: Option<PointLocation>,
}

impl InteractionState {
    /// Vergisst alle Punkt-Positionen (nach strukturellen Änderungen).
    pub fn forget_locations(&mut self) {
        self.hovered = None;
        self.selected = None;
        self.dragging = None;
    }
}

/// Zentraler Anwendungszustand
pub struct AppState {
    /// Aktuelle Zeichnung (Arc für O(1)-Clone in RenderScene)
    pub drawing: Arc<Drawing>,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Zieldatei für "Optionen speichern"
    pub options_path: PathBuf,
    /// Zeiger- und Auswahlzustand
    pub interaction: InteractionState,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Zähler des letzten Render-Durchlaufs
    pub last_frame: FrameStats,
    /// Fehlermeldung des letzten Render-Durchlaufs
    pub render_error: Option<String>,
    /// Signalisiert, dass die App beendet werden soll
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Startzustand: Start-Kurve, Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Startzustand mit bereits geladenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            drawing: Arc::new(Drawing::with_seed_curve()),
            options,
            options_path: ViewerOptions::config_path(),
            interaction: InteractionState::default(),
            command_log: CommandLog::new(),
            last_frame: FrameStats::default(),
            render_error: None,
            should_exit: false,
        }
    }

    /// Ersetzt die Zeichnung (z.B. für Tests und Benchmarks).
    pub fn with_drawing(mut self, drawing: Drawing) -> Self {
        self.drawing = Arc::new(drawing);
        self.interaction.forget_locations();
        self
    }

    /// Gibt die Anzahl der Kurven zurück.
    pub fn curve_count(&self) -> usize {
        self.drawing.curve_count()
    }

    /// Gibt die Anzahl aller Punkte zurück.
    pub fn point_count(&self) -> usize {
        self.drawing.point_count()
    }

    /// Gibt `true` zurück, wenn gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.interaction.dragging.is_some()
    }
}
