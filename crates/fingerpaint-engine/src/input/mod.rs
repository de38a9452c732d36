//! Input types.
//!
//! Platform-agnostic: hosts translate their own touch/mouse events into
//! [`PointerEvent`]s. Hit-testing stays on the host side.

mod types;

pub use types::{PointerEvent, PointerPhase};
