use crate::error::Result;
use crate::paint::{Channel, Cmy, Rgb};

use super::{ChannelDial, Palette};

/// Palette, primary dials and the working CMY color, kept consistent.
///
/// The working color is what the brush paints with. Palette taps and mix
/// mode replace it wholesale; dial drags edit one channel and write the
/// result back into the current palette entry.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    palette: Palette,
    cmy: Cmy,
    dials: [ChannelDial; 3],
}

impl ColorPicker {
    /// Starts from the palette's current color.
    pub fn new(palette: Palette) -> Self {
        let cmy = Cmy::from_rgb(palette.current_color());
        Self::restore(palette, cmy)
    }

    /// Resumes with a previously saved working color.
    pub fn restore(palette: Palette, cmy: Cmy) -> Self {
        let mut picker = Self {
            palette,
            cmy: cmy.clamped(),
            dials: Channel::ALL.map(ChannelDial::new),
        };
        let editable = !picker.palette.in_mix_mode();
        for dial in &mut picker.dials {
            dial.set_editable(editable);
        }
        picker.sync_dials();
        picker
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn cmy(&self) -> Cmy {
        self.cmy
    }

    /// Color strokes should be painted with.
    #[inline]
    pub fn paint_color(&self) -> Rgb {
        self.cmy.to_rgb()
    }

    #[inline]
    pub fn dial(&self, channel: Channel) -> &ChannelDial {
        &self.dials[dial_slot(channel)]
    }

    /// Forwards a palette tap; see [`Palette::tap`].
    pub fn tap(&mut self, index: usize) -> Result<Rgb> {
        let color = self.palette.tap(index)?;
        self.set_working(color);
        Ok(self.paint_color())
    }

    /// Toggles mix mode. Dials are disabled while mixing.
    pub fn toggle_mix_mode(&mut self) -> Result<Rgb> {
        let entering = !self.palette.in_mix_mode();
        let color = self.palette.set_mix_mode(entering)?;
        for dial in &mut self.dials {
            dial.set_editable(!entering);
        }
        self.set_working(color);
        Ok(self.paint_color())
    }

    pub fn add_color(&mut self, color: Rgb) -> Result<usize> {
        let index = self.palette.add_color(color)?;
        self.set_working(color);
        Ok(index)
    }

    pub fn remove_color(&mut self, index: usize) -> Result<()> {
        self.palette.remove_color(index)
    }

    pub fn begin_dial(&mut self, channel: Channel, y: f32) {
        self.dials[dial_slot(channel)].begin(y);
    }

    pub fn end_dial(&mut self, channel: Channel) {
        self.dials[dial_slot(channel)].end();
    }

    /// Drags one dial. Returns the new paint color when the drag took effect.
    pub fn drag_dial(&mut self, channel: Channel, y: f32, dial_height: f32) -> Option<Rgb> {
        let value = self.dials[dial_slot(channel)].drag_to(y, dial_height)?;
        self.cmy = self.cmy.with_channel(channel, value);
        let color = self.paint_color();
        self.palette.set_current_color(color);
        Some(color)
    }

    fn set_working(&mut self, color: Rgb) {
        self.cmy = Cmy::from_rgb(color);
        self.sync_dials();
    }

    fn sync_dials(&mut self) {
        for dial in &mut self.dials {
            dial.set_percent(self.cmy.channel(dial.channel()));
        }
    }
}

#[inline]
fn dial_slot(channel: Channel) -> usize {
    match channel {
        Channel::Cyan => 0,
        Channel::Magenta => 1,
        Channel::Yellow => 2,
    }
}
