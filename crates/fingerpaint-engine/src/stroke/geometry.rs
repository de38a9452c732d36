use crate::coords::NormalizedPoint;

use super::Stroke;

/// One quadratic-Bezier piece of a smoothed stroke, in normalized space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadSegment {
    pub ctrl: NormalizedPoint,
    pub end: NormalizedPoint,
}

/// Smoothed drawable geometry for a stroke.
///
/// Starts at the first sample; each further sample contributes one segment
/// whose control point is the previous sample and whose end point is the
/// midpoint between the previous and the new sample. The curve therefore runs
/// through every sample midpoint without a global spline fit.
///
/// Never persisted: it is always derivable from the point list via
/// [`rebuild_geometry`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathGeometry {
    start: NormalizedPoint,
    segments: Vec<QuadSegment>,
}

impl PathGeometry {
    #[inline]
    pub fn new(start: NormalizedPoint) -> Self {
        Self { start, segments: Vec::new() }
    }

    #[inline]
    pub fn start(&self) -> NormalizedPoint {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[QuadSegment] {
        &self.segments
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Start point followed by every segment end point.
    pub fn endpoints(&self) -> impl Iterator<Item = NormalizedPoint> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().map(|s| s.end))
    }

    /// Appends the segment contributed by `next`, given the previously kept sample.
    #[inline]
    pub(crate) fn extend(&mut self, prev: NormalizedPoint, next: NormalizedPoint) {
        self.segments.push(QuadSegment { ctrl: prev, end: prev.midpoint(next) });
    }
}

/// Rebuilds a stroke's geometry from its point list.
///
/// Produces exactly what incremental recording produced for the same points,
/// so persisted strokes can be redrawn after a restore or a surface resize.
pub fn rebuild_geometry(stroke: &Stroke) -> PathGeometry {
    let points = stroke.points();
    let mut geometry = PathGeometry::new(stroke.first_point());
    for pair in points.windows(2) {
        geometry.extend(pair[0], pair[1]);
    }
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgb;

    fn p(x: f32, y: f32) -> NormalizedPoint { NormalizedPoint::new(x, y) }

    #[test]
    fn single_point_has_no_segments() {
        let g = rebuild_geometry(&Stroke::new(p(0.1, 0.2), Rgb::BLACK));
        assert_eq!(g.start(), p(0.1, 0.2));
        assert_eq!(g.segment_count(), 0);
    }

    #[test]
    fn segment_uses_previous_point_as_control() {
        let s = Stroke::from_points(vec![p(0.0, 0.0), p(0.5, 0.25), p(1.0, 0.75)], Rgb::BLACK).unwrap();
        let g = rebuild_geometry(&s);
        assert_eq!(g.segments(), &[
            QuadSegment { ctrl: p(0.0, 0.0), end: p(0.25, 0.125) },
            QuadSegment { ctrl: p(0.5, 0.25), end: p(0.75, 0.5) },
        ]);
    }

    #[test]
    fn endpoints_start_with_first_sample() {
        let s = Stroke::from_points(vec![p(0.0, 0.0), p(0.5, 0.25)], Rgb::BLACK).unwrap();
        let ends: Vec<_> = rebuild_geometry(&s).endpoints().collect();
        assert_eq!(ends, vec![p(0.0, 0.0), p(0.25, 0.125)]);
    }
}
