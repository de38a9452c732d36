use crate::coords::{Vec2, Viewport};
use crate::paint::StrokeStyle;
use crate::scene::{DrawCmd, DrawList};
use crate::stroke::PathGeometry;

/// Quadratic segment in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelQuad {
    pub ctrl: Vec2,
    pub end: Vec2,
}

/// Stroked path payload: move to `start`, then one quad per segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub start: Vec2,
    pub segments: Vec<PixelQuad>,
    pub style: StrokeStyle,
}

impl PathCmd {
    /// Scales normalized geometry onto a `viewport`-sized surface.
    pub fn from_geometry(geometry: &PathGeometry, viewport: Viewport, style: StrokeStyle) -> Self {
        let segments = geometry
            .segments()
            .iter()
            .map(|s| PixelQuad {
                ctrl: s.ctrl.to_pixels(viewport),
                end: s.end.to_pixels(viewport),
            })
            .collect();

        Self {
            start: geometry.start().to_pixels(viewport),
            segments,
            style,
        }
    }
}

impl DrawList {
    /// Records a stroked path for `geometry` scaled to `viewport`.
    #[inline]
    pub fn push_path(&mut self, geometry: &PathGeometry, viewport: Viewport, style: StrokeStyle) {
        self.push(DrawCmd::Path(PathCmd::from_geometry(geometry, viewport, style)));
    }
}
