//! FingerPaint engine crate.
//!
//! Toolkit-independent core of a finger-painting app with a subtractive
//! color-mixing palette. The host UI feeds pointer samples and palette
//! interactions in and gets draw commands, mixed colors and persistable
//! snapshots back.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Rgb`, `Cmy`, `mix_colors`, stroke/dot styles |
//! | [`stroke`] | `StrokeRecorder`, `Stroke`, `PathGeometry`, `rebuild_geometry` |
//! | [`scene`] | `DrawList` and pixel-space draw commands |
//! | [`surface`] | `PaintSurface`: pointer routing for one paint area |
//! | [`palette`] | `Palette`, `ChannelDial`, `ColorPicker` |
//! | [`session`] | `SessionSnapshot` JSON save/restore |
//!
//! ```rust
//! use fingerpaint_engine::paint::{mix_colors, Rgb};
//!
//! let mixed = mix_colors(&[Rgb::CYAN, Rgb::YELLOW]).unwrap();
//! assert_eq!(mixed, Rgb::GREEN);
//! ```

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod palette;
pub mod scene;
pub mod session;
pub mod stroke;
pub mod surface;

mod error;

pub use error::{Error, Result};
