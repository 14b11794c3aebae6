//! Handler für Optionen und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Übernimmt neue Optionen ohne sie zu persistieren.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) {
    if let Err(e) = options.flatten_config() {
        log::warn!("Optionen übernommen, aber ungültig: {}", e);
    }
    state.options = options;
    use_cases::editing::refresh_hover(state);
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)
}

/// Setzt Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    state.options = ViewerOptions::default();
    use_cases::editing::refresh_hover(state);
    log::info!("Optionen auf Standardwerte zurückgesetzt");
}
