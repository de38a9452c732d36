/// Phase of a single-pointer touch gesture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The platform took the gesture away (e.g. a system swipe); nothing is kept.
    Cancel,
}

/// Pointer sample in surface pixels.
///
/// The host translates its touch events into these; coordinates are relative
/// to the drawing surface's top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    #[inline]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    #[inline]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    #[inline]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    #[inline]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }
}
