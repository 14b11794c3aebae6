//! Casteljau Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use crate::core::{
    ConstructionView, Curve, Drawing, FlattenConfig, Point, PointLocation, Segment, StopCondition,
    StopConditionKind, SubdivisionError,
};
pub use render::{Canvas, FrameStats, RecordingCanvas};
pub use shared::{RenderScene, ViewerOptions};
