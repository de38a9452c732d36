//! The drawing surface: recorder, finished strokes and current paint color
//! for one paint area.

mod area;

pub use area::PaintSurface;
