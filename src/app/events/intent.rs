use crate::core::Point;
use crate::shared::ViewerOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärtaste auf der Zeichenfläche gedrückt (Canvas-Koordinaten)
    CanvasPressed { pos: Point, shift: bool },
    /// Zeiger hat sich über der Zeichenfläche bewegt
    PointerMoved { pos: Point },
    /// Primärtaste losgelassen
    CanvasReleased,
    /// Selektierten (oder letzten) Punkt löschen
    DeleteRequested,
    /// Zeichnung leeren
    ClearRequested,
    /// Optionen im Panel geändert
    OptionsChanged { options: ViewerOptions },
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
