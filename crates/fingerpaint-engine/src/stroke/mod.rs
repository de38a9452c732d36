//! Freehand stroke recording.
//!
//! Responsibilities:
//! - turn a noisy stream of pointer samples into a compact point list
//! - grow a smoothed quadratic-Bezier geometry one segment per kept sample
//! - rebuild the same geometry from a persisted point list on demand
//!
//! Points are stored normalized; scaling to pixels happens in `scene`.

mod completed;
mod geometry;
mod recorder;
mod stroke;

pub use completed::CompletedStrokeLog;
pub use geometry::{rebuild_geometry, PathGeometry, QuadSegment};
pub use recorder::{FinishedStroke, RecorderConfig, StrokeRecorder};
pub use stroke::{RenderKind, Stroke};
