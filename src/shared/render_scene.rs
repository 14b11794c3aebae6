//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ViewerOptions;
use crate::core::{Drawing, PointLocation};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Die aktuelle Zeichnung (Arc für O(1)-Clone pro Frame)
    pub drawing: Arc<Drawing>,
    /// Laufzeit-Optionen für Abbruchbedingung, Schalter, Farben
    pub options: ViewerOptions,
    /// Punkt unter dem Cursor (wird vergrößert gezeichnet)
    pub hovered: Option<PointLocation>,
}

impl RenderScene {
    /// Szene ohne Hover.
    pub fn new(drawing: Arc<Drawing>, options: ViewerOptions) -> Self {
        Self {
            drawing,
            options,
            hovered: None,
        }
    }

    /// Gibt zurück, ob mindestens eine Kurve sichtbar ist.
    pub fn has_drawable_curves(&self) -> bool {
        self.drawing.curves.iter().any(|curve| curve.is_drawable())
    }
}
