//! Radial palette model.
//!
//! - [`Palette`]: the user's custom paints, selection and mix mode
//! - [`ChannelDial`]: drag-to-adjust model for one primary (C, M or Y)
//! - [`ColorPicker`]: ties palette, dials and the working CMY color together
//!
//! Layout and animation of the palette widgets live in the host.

mod dial;
mod picker;
mod state;

pub use dial::ChannelDial;
pub use picker::ColorPicker;
pub use state::{Palette, PaletteConfig, PaletteState};
