use serde::{Deserialize, Serialize};

use super::Rgb;

/// One of the three subtractive primaries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Cyan,
    Magenta,
    Yellow,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Cyan, Channel::Magenta, Channel::Yellow];

    /// Full-intensity swatch for this primary.
    pub const fn swatch(self) -> Rgb {
        match self {
            Channel::Cyan => Rgb::CYAN,
            Channel::Magenta => Rgb::MAGENTA,
            Channel::Yellow => Rgb::YELLOW,
        }
    }
}

/// Subtractive (cyan / magenta / yellow) color.
///
/// Each channel is the amount of red / green / blue light absorbed, nominally
/// in `[0, 1]`. Values outside that range are tolerated here and clamped when
/// converting back to [`Rgb`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cmy {
    pub c: f32,
    pub m: f32,
    pub y: f32,
}

impl Cmy {
    #[inline]
    pub const fn new(c: f32, m: f32, y: f32) -> Self {
        Self { c, m, y }
    }

    /// `1 - channel / 255` for each RGB channel.
    #[inline]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            c: 1.0 - rgb.r as f32 / 255.0,
            m: 1.0 - rgb.g as f32 / 255.0,
            y: 1.0 - rgb.b as f32 / 255.0,
        }
    }

    #[inline]
    pub fn to_rgb(self) -> Rgb {
        cmy_to_rgb(self.c, self.m, self.y)
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> f32 {
        match channel {
            Channel::Cyan => self.c,
            Channel::Magenta => self.m,
            Channel::Yellow => self.y,
        }
    }

    /// Returns a copy with one channel replaced; `value` is clamped to `[0, 1]`.
    #[inline]
    pub fn with_channel(self, channel: Channel, value: f32) -> Self {
        let value = clamp_unit(value);
        let mut out = self;
        match channel {
            Channel::Cyan => out.c = value,
            Channel::Magenta => out.m = value,
            Channel::Yellow => out.y = value,
        }
        out
    }

    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(clamp_unit(self.c), clamp_unit(self.m), clamp_unit(self.y))
    }
}

/// Converts a CMY triple to RGB: `round((1 - v) * 255)` per channel.
///
/// Total: out-of-range components saturate to `0` / `255`, NaN yields `0`.
#[inline]
pub fn cmy_to_rgb(c: f32, m: f32, y: f32) -> Rgb {
    Rgb::new(channel_to_u8(c), channel_to_u8(m), channel_to_u8(y))
}

#[inline]
fn channel_to_u8(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    ((1.0 - v) * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
