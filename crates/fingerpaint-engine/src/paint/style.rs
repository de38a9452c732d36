use super::Rgb;

/// How to stroke a smoothed path.
///
/// A value object built per draw command; renderers never share or mutate one
/// across commands. Caps and joins are always round.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Full line width in pixels.
    pub width: f32,
    pub color: Rgb,
}

impl StrokeStyle {
    /// Round-capped, round-joined line as wide as a dot of `radius`.
    #[inline]
    pub fn brush(radius: f32, color: Rgb) -> Self {
        Self { width: radius * 2.0, color }
    }
}

/// How to fill a single-point (tap) stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DotStyle {
    pub radius: f32,
    pub color: Rgb,
}

impl DotStyle {
    #[inline]
    pub fn new(radius: f32, color: Rgb) -> Self {
        Self { radius, color }
    }
}
