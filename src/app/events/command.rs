use crate::core::{Point, PointLocation};
use crate::shared::ViewerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt an die letzte Kurve anhängen (optional neue, verkettete Kurve)
    AddPoint { pos: Point, start_new_curve: bool },
    /// Ziehen eines bestehenden Punkts beginnen
    BeginDrag { location: PointLocation },
    /// Gezogenen Punkt verschieben
    MoveTo {
        location: PointLocation,
        target: Point,
        lock_tangents: bool,
    },
    /// Ziehen beenden
    EndDrag,
    /// Hover-Zustand für eine Zeigerposition neu bestimmen
    UpdateHover { pos: Point },
    /// Selektierten Punkt löschen, ohne Selektion den letzten Punkt
    DeleteSelectedPoint,
    /// Zeichnung protokollieren und auf eine leere Kurve zurücksetzen
    ClearDrawing,
    /// Neue Optionen übernehmen
    ApplyOptions { options: ViewerOptions },
    /// Optionen persistieren
    SaveOptions,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzname für Status-Bar und Log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPoint { .. } => "Punkt anfügen",
            Self::BeginDrag { .. } => "Ziehen beginnen",
            Self::MoveTo { .. } => "Punkt verschieben",
            Self::EndDrag => "Ziehen beenden",
            Self::UpdateHover { .. } => "Hover",
            Self::DeleteSelectedPoint => "Punkt löschen",
            Self::ClearDrawing => "Leeren",
            Self::ApplyOptions { .. } => "Optionen übernehmen",
            Self::SaveOptions => "Optionen speichern",
            Self::ResetOptions => "Standardwerte",
            Self::RequestExit => "Beenden",
        }
    }
}
