use crate::paint::Channel;

/// Drag-to-adjust model for one primary color dial.
///
/// Dragging up raises the channel, dragging down lowers it; a drag across twice
/// the dial's height sweeps the full `[0, 1]` range. A disabled dial (the
/// palette is mixing) ignores drags.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChannelDial {
    channel: Channel,
    percent: f32,
    last_y: Option<f32>,
    editable: bool,
}

impl ChannelDial {
    pub fn new(channel: Channel) -> Self {
        Self { channel, percent: 0.0, last_y: None, editable: true }
    }

    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Sets the displayed value without firing a change (e.g. after a palette tap).
    #[inline]
    pub fn set_percent(&mut self, percent: f32) {
        self.percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 1.0) };
    }

    #[inline]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        if !editable {
            self.last_y = None;
        }
    }

    /// Pointer went down on the dial at `y` (pixels).
    pub fn begin(&mut self, y: f32) {
        if self.editable {
            self.last_y = Some(y);
        }
    }

    /// Pointer moved to `y` on a dial `dial_height` pixels tall.
    ///
    /// Returns the new channel value, or `None` when the drag was ignored.
    pub fn drag_to(&mut self, y: f32, dial_height: f32) -> Option<f32> {
        if !self.editable || dial_height <= 0.0 {
            return None;
        }
        let last_y = self.last_y?;

        let factor = (last_y - y) / (2.0 * dial_height);
        self.set_percent(self.percent + factor);
        self.last_y = Some(y);
        Some(self.percent)
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }
}
