use serde::{Deserialize, Serialize};

use super::{Vec2, Viewport};

/// A touch location relative to the surface size.
///
/// Both components are fractions of the surface extent, so a stroke recorded
/// on one screen replays at the same relative position on any other.
/// Persisted as a plain `{ "x": .., "y": .. }` pair.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts a pixel position on `viewport` into normalized space.
    ///
    /// Positions outside the surface (a finger dragged past the edge) are
    /// clamped to `[0, 1]`. An invalid viewport yields the origin.
    pub fn from_pixels(x: f32, y: f32, viewport: Viewport) -> Self {
        if !viewport.is_valid() {
            return Self::default();
        }
        Self { x: unit(x / viewport.width), y: unit(y / viewport.height) }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Scales to surface pixels. Pure axis scale: no rotation, no skew.
    #[inline]
    pub fn to_pixels(self, viewport: Viewport) -> Vec2 {
        Vec2::new(self.x, self.y).scale(viewport.width, viewport.height)
    }

    #[inline]
    pub fn midpoint(self, other: NormalizedPoint) -> NormalizedPoint {
        NormalizedPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Clamps to `[0, 1]`; NaN lands on the origin edge.
#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_divides_by_surface_size() {
        let p = NormalizedPoint::from_pixels(150.0, 75.0, Viewport::new(300.0, 300.0));
        assert_eq!(p, NormalizedPoint::new(0.5, 0.25));
    }

    #[test]
    fn from_pixels_clamps_outside_surface() {
        let p = NormalizedPoint::from_pixels(-20.0, 900.0, Viewport::new(300.0, 300.0));
        assert_eq!(p, NormalizedPoint::new(0.0, 1.0));
    }

    #[test]
    fn from_pixels_invalid_viewport_is_origin() {
        let p = NormalizedPoint::from_pixels(10.0, 10.0, Viewport::new(0.0, 100.0));
        assert_eq!(p, NormalizedPoint::default());
    }

    #[test]
    fn from_pixels_maps_nan_to_origin_edge() {
        let vp = Viewport::new(300.0, 300.0);
        assert_eq!(NormalizedPoint::from_pixels(f32::NAN, 150.0, vp), NormalizedPoint::new(0.0, 0.5));
        assert_eq!(NormalizedPoint::from_pixels(f32::INFINITY, f32::NEG_INFINITY, vp), NormalizedPoint::new(1.0, 0.0));
    }

    #[test]
    fn to_pixels_scales_each_axis() {
        let v = NormalizedPoint::new(0.5, 0.25).to_pixels(Viewport::new(200.0, 400.0));
        assert_eq!(v, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn midpoint_is_halfway() {
        let m = NormalizedPoint::new(0.0, 0.2).midpoint(NormalizedPoint::new(0.4, 0.6));
        assert!((m.x - 0.2).abs() < 1e-6);
        assert!((m.y - 0.4).abs() < 1e-6);
    }
}
