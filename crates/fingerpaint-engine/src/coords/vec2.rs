/// 2D vector in surface pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise product; the axis scale used to map normalized space onto a surface.
    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Vec2 {
        Vec2::new(self.x * sx, self.y * sy)
    }
}
