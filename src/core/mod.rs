//! Core-Domäne: Geometrie, Unterteilung, Zeichnungs-Topologie.
//!
//! Frei von UI-Abhängigkeiten; alle Funktionen arbeiten auf expliziten
//! Argumenten.

pub mod construction;
pub mod drawing;
pub mod geometry;
pub mod manipulation;
pub mod subdivision;

pub use construction::ConstructionView;
pub use drawing::{Curve, Drawing, PointLocation, SEED_CURVE};
pub use geometry::{lerp, reflect, BoundingBox, Point};
pub use manipulation::{add_point, delete_last_point, delete_point, hovered_point, move_point};
pub use subdivision::{
    flatten, flatten_to_segments, intermediates, reduce, split, FlattenConfig,
    FlattenStats, FlattenVisitor, Segment, StopCondition, StopConditionKind, SubdivisionError,
    DEFAULT_MAX_RECURSION_DEPTH, RECURSION_DEPTH_LIMIT,
};
