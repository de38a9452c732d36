use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque 24-bit sRGB color.
///
/// Hosts hand colors around as packed integers (`0xAARRGGBB` or `0x00RRGGBB`);
/// the alpha byte is ignored on the way in and always zero on the way out.
/// Persisted as that packed integer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
    pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);
    pub const MAGENTA: Rgb = Rgb::new(0xff, 0x00, 0xff);
    pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks `0x??RRGGBB`; the top byte is discarded.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(packed: u32) -> Self {
        Rgb::from_u32(packed)
    }
}

impl From<Rgb> for u32 {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.to_u32()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
