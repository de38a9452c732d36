use crate::coords::Viewport;
use crate::paint::{DotStyle, StrokeStyle};
use crate::stroke::{FinishedStroke, RecorderConfig, RenderKind};

use super::DrawCmd;

/// Recorded draw stream for a frame, in paint order (first pushed is drawn first).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records the command for one stroke on a surface of `viewport` size.
    ///
    /// A single-point stroke becomes a filled dot of `paint_radius`; anything
    /// longer becomes its smoothed path stroked `2 * paint_radius` wide.
    pub fn push_stroke(&mut self, finished: &FinishedStroke, viewport: Viewport, config: RecorderConfig) {
        let color = finished.stroke.color();
        match finished.stroke.render_kind() {
            RenderKind::Dot(point) => {
                self.push_dot(point.to_pixels(viewport), DotStyle::new(config.paint_radius, color));
            }
            RenderKind::Path => {
                self.push_path(&finished.geometry, viewport, StrokeStyle::brush(config.paint_radius, color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{NormalizedPoint, Vec2};
    use crate::paint::Rgb;
    use crate::scene::PixelQuad;
    use crate::stroke::Stroke;

    fn p(x: f32, y: f32) -> NormalizedPoint { NormalizedPoint::new(x, y) }

    #[test]
    fn dot_stroke_becomes_scaled_circle() {
        let finished = FinishedStroke::rebuilt(Stroke::new(p(0.5, 0.25), Rgb::RED));
        let mut list = DrawList::new();
        list.push_stroke(&finished, Viewport::new(200.0, 400.0), RecorderConfig::default());

        match &list.items()[0] {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::new(100.0, 100.0));
                assert_eq!(c.style, DotStyle::new(10.0, Rgb::RED));
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn path_stroke_is_scaled_once() {
        let stroke = Stroke::from_points(vec![p(0.0, 0.0), p(0.5, 0.5), p(1.0, 0.5)], Rgb::BLUE).unwrap();
        let finished = FinishedStroke::rebuilt(stroke);
        let mut list = DrawList::new();
        list.push_stroke(&finished, Viewport::new(100.0, 200.0), RecorderConfig::default());

        let DrawCmd::Path(path) = &list.items()[0] else {
            panic!("expected path");
        };
        assert_eq!(path.start, Vec2::new(0.0, 0.0));
        assert_eq!(path.segments, vec![
            PixelQuad { ctrl: Vec2::new(0.0, 0.0), end: Vec2::new(25.0, 50.0) },
            PixelQuad { ctrl: Vec2::new(50.0, 100.0), end: Vec2::new(75.0, 100.0) },
        ]);
        assert_eq!(path.style.width, 20.0);
        assert_eq!(path.style.color, Rgb::BLUE);
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut list = DrawList::new();
        list.push_stroke(
            &FinishedStroke::rebuilt(Stroke::new(p(0.1, 0.1), Rgb::RED)),
            Viewport::new(10.0, 10.0),
            RecorderConfig::default(),
        );
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
