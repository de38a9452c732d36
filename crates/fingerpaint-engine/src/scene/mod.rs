//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in pixel space
//! - turn recorded strokes into commands, applying the surface scale exactly once
//! - keep shape-specific payloads isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::circle::CircleCmd;
pub use shapes::path::{PathCmd, PixelQuad};
