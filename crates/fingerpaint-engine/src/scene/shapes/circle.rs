use crate::coords::Vec2;
use crate::paint::DotStyle;
use crate::scene::{DrawCmd, DrawList};

/// Filled circle payload; how single-point strokes are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub style: DotStyle,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, style: DotStyle) -> Self {
        Self { center, style }
    }
}

impl DrawList {
    /// Records a filled dot at `center` (pixels).
    #[inline]
    pub fn push_dot(&mut self, center: Vec2, style: DotStyle) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, style)));
    }
}
