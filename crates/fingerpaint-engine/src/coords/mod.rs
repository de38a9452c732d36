//! Coordinate types shared by the recorder, the scene and the surface.
//!
//! Two spaces are in play:
//! - normalized: fractions of the surface size, `[0, 1]` on both axes
//! - pixel: surface pixels, origin top-left, +X right, +Y down
//!
//! Strokes are stored normalized and scaled to pixels once, at draw time.

mod point;
mod vec2;
mod viewport;

pub use point::NormalizedPoint;
pub use vec2::Vec2;
pub use viewport::Viewport;
