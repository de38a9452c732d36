//! Color model and paint styles.
//!
//! Scope:
//! - packed 24-bit [`Rgb`] colors as exchanged with the host
//! - subtractive [`Cmy`] colors and the conversions between the two
//! - N-way paint mixing in CMY space
//! - immutable style descriptions attached to draw commands

pub mod cmy;
pub mod color;
pub mod mix;
pub mod style;

pub use cmy::{cmy_to_rgb, Channel, Cmy};
pub use color::Rgb;
pub use mix::mix_colors;
pub use style::{DotStyle, StrokeStyle};
