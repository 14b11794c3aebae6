//! Zentrale Konfiguration für den Casteljau Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{FlattenConfig, StopCondition, StopConditionKind, SubdivisionError};
use serde::{Deserialize, Serialize};

// ── Unterteilung ────────────────────────────────────────────────────

/// Standard-Rekursionstiefe bei fester Tiefe.
pub const DEFAULT_DEPTH: u32 = 5;
/// Standard-Abbruchbedingung (Schlüssel).
pub const DEFAULT_STOP_CONDITION: &str = "DEPTH";
/// Standard-Schwellwert für Distanz und Bounding-Box (Pixel).
pub const DEFAULT_THRESHOLD: f64 = 10.0;
/// Standard-Kurvenparameter der Konstruktionsansicht.
pub const DEFAULT_CONSTRUCTION_PARAMETER: f64 = 0.5;

// ── Interaktion ─────────────────────────────────────────────────────

/// Hover-Radius in Pixeln (strikt kleiner).
pub const HOVER_RADIUS_PX: f64 = 5.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienstärke der Kurvensegmente.
pub const CURVE_LINE_WIDTH: f32 = 2.0;
/// Linienstärke von Konstruktionslinien und Bounding-Boxen.
pub const HELPER_LINE_WIDTH: f32 = 0.8;
/// Kantenlänge eines Kontrollpunkt-Markers.
pub const POINT_SIZE: f32 = 4.0;
/// Kantenlänge eines gehoverten Kontrollpunkt-Markers.
pub const POINT_SIZE_HOVERED: f32 = 8.0;
/// Kantenlänge des ausgewerteten Kurvenpunkts.
pub const EVALUATED_POINT_SIZE: f32 = 6.0;

/// Farbe der Kontrollpunkte und ungefärbter Kurven (RGBA: Schwarz).
pub const COLOR_DEFAULT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Bounding-Boxen (RGBA: Grau).
pub const COLOR_BOUNDING_BOX: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Farbe der Konstruktionspunkte (RGBA: Blau).
pub const COLOR_CONSTRUCTION_POINT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe des ausgewerteten Kurvenpunkts (RGBA: Rot).
pub const COLOR_EVALUATED_POINT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Farbpalette für Kurven, Segmente, Konstruktionsstufen und Tiefen.
///
/// midnightblue, darkgreen, red, lime, cyan, magenta, lightpink
pub const PALETTE: [[f32; 4]; 7] = [
    [0.098, 0.098, 0.439, 1.0],
    [0.0, 0.392, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.714, 0.757, 1.0],
];

/// Dateiname der Optionen-Datei neben der Binary.
const OPTIONS_FILE_NAME: &str = "casteljau_viewer.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `casteljau_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Unterteilung ────────────────────────────────────────────
    /// Rekursionstiefe bei fester Tiefe
    pub depth: u32,
    /// Schlüssel der Abbruchbedingung (`DEPTH`, `DISTANCE`, `BOUNDING_BOX`)
    pub stop_condition: String,
    /// Schwellwert für Distanz bzw. Bounding-Box-Größe
    pub threshold: f64,
    /// Harte Tiefengrenze für alle Abbruchbedingungen
    pub max_recursion_depth: u32,
    /// Kurvenparameter t der Konstruktionsansicht
    pub construction_parameter: f64,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Jede Kurve in eigener Palettenfarbe
    pub color_curves: bool,
    /// Jedes Segment in eigener Palettenfarbe
    pub color_segments: bool,
    pub show_control_points: bool,
    pub show_construction: bool,
    /// Nur wirksam bei Abbruchbedingung `BOUNDING_BOX`
    pub show_bounding_boxes: bool,
    pub show_subdivision_points: bool,

    // ── Interaktion ─────────────────────────────────────────────
    /// Tangenten an Joins beim Ziehen gespiegelt halten
    pub lock_tangents: bool,
    /// Hover-Radius in Pixeln
    pub hover_radius_px: f64,

    // ── Stil ────────────────────────────────────────────────────
    pub curve_line_width: f32,
    pub helper_line_width: f32,
    pub point_size: f32,
    pub point_size_hovered: f32,
    pub evaluated_point_size: f32,
    pub color_default: [f32; 4],
    pub color_bounding_box: [f32; 4],
    pub color_construction_point: [f32; 4],
    pub color_evaluated_point: [f32; 4],
    pub palette: Vec<[f32; 4]>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            stop_condition: DEFAULT_STOP_CONDITION.to_string(),
            threshold: DEFAULT_THRESHOLD,
            max_recursion_depth: crate::core::DEFAULT_MAX_RECURSION_DEPTH,
            construction_parameter: DEFAULT_CONSTRUCTION_PARAMETER,

            color_curves: false,
            color_segments: false,
            show_control_points: true,
            show_construction: false,
            show_bounding_boxes: false,
            show_subdivision_points: false,

            lock_tangents: false,
            hover_radius_px: HOVER_RADIUS_PX,

            curve_line_width: CURVE_LINE_WIDTH,
            helper_line_width: HELPER_LINE_WIDTH,
            point_size: POINT_SIZE,
            point_size_hovered: POINT_SIZE_HOVERED,
            evaluated_point_size: EVALUATED_POINT_SIZE,
            color_default: COLOR_DEFAULT,
            color_bounding_box: COLOR_BOUNDING_BOX,
            color_construction_point: COLOR_CONSTRUCTION_POINT,
            color_evaluated_point: COLOR_EVALUATED_POINT,
            palette: PALETTE.to_vec(),
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("casteljau_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Löst die Abbruchbedingung auf und baut die Flatten-Konfiguration.
    pub fn flatten_config(&self) -> Result<FlattenConfig, SubdivisionError> {
        let stop = StopCondition::resolve(&self.stop_condition, self.depth, self.threshold)?;
        Ok(FlattenConfig::with_max_recursion_depth(stop, self.max_recursion_depth))
    }

    /// Art der Abbruchbedingung; `None` bei unbekanntem Schlüssel.
    pub fn stop_condition_kind(&self) -> Option<StopConditionKind> {
        self.stop_condition.parse().ok()
    }

    /// Setzt die Abbruchbedingung über ihre Art.
    pub fn set_stop_condition(&mut self, kind: StopConditionKind) {
        self.stop_condition = kind.key().to_string();
    }

    /// Kurvenparameter der Konstruktionsansicht, geprüft auf [0, 1].
    pub fn checked_construction_parameter(&self) -> Result<f64, SubdivisionError> {
        let t = self.construction_parameter;
        if (0.0..=1.0).contains(&t) {
            Ok(t)
        } else {
            Err(SubdivisionError::InvalidParameter(t))
        }
    }

    /// Palettenfarbe zu einem fortlaufenden Index (zyklisch).
    pub fn palette_color(&self, index: usize) -> [f32; 4] {
        if self.palette.is_empty() {
            return self.color_default;
        }
        self.palette[index % self.palette.len()]
    }
}
