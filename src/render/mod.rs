//! Rendering über eine abstrakte Zeichenfläche.
//!
//! `render_frame` ist die einzige Stelle, die Unterteilung, Konstruktionsansicht
//! und Zeichenprimitive zusammenführt. Das Backend (egui, Aufzeichnung) steckt
//! hinter dem `Canvas`-Trait.

mod canvas;
mod frame;

pub use crate::shared::RenderScene;
pub use canvas::{Canvas, DrawCall, RecordingCanvas};
pub use frame::{render_frame, FrameStats};
