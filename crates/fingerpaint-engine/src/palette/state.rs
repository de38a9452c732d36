use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::paint::{mix_colors, Rgb};

/// Palette size limits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Removal stops at this many entries.
    pub min_colors: usize,
    /// Adding (or mixing into a new entry) stops at this many entries.
    pub max_colors: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            min_colors: 2,
            max_colors: 11,
        }
    }
}

/// Persisted palette shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteState {
    pub colors: Vec<Rgb>,
    pub selected: Vec<usize>,
    pub current: usize,
    #[serde(default)]
    pub in_mix_mode: bool,
}

/// The user's custom paints.
///
/// Invariants:
/// - never empty
/// - `current` indexes an entry and is always selected
/// - outside mix mode the selection is exactly `{ current }`
#[derive(Debug, Clone)]
pub struct Palette {
    config: PaletteConfig,
    colors: Vec<Rgb>,
    selected: BTreeSet<usize>,
    current: usize,
    in_mix_mode: bool,
}

impl Palette {
    /// Builds a palette by adding `colors` in order; the last one becomes current.
    ///
    /// # Errors
    /// [`Error::InvalidPaletteState`] if `colors` is empty or exceeds `config.max_colors`.
    pub fn with_colors(config: PaletteConfig, colors: impl IntoIterator<Item = Rgb>) -> Result<Self> {
        let colors: Vec<Rgb> = colors.into_iter().collect();
        let Some(last) = colors.len().checked_sub(1) else {
            return Err(Error::InvalidPaletteState("palette needs at least one color".into()));
        };
        if colors.len() > config.max_colors {
            return Err(Error::InvalidPaletteState(format!(
                "{} colors exceed the maximum of {}",
                colors.len(),
                config.max_colors
            )));
        }

        Ok(Self {
            config,
            colors,
            selected: BTreeSet::from([last]),
            current: last,
            in_mix_mode: false,
        })
    }

    /// Rebuilds a palette from persisted state.
    ///
    /// The current entry is re-selected if the saved selection lost it.
    ///
    /// # Errors
    /// [`Error::InvalidPaletteState`] for an empty or oversized color list or
    /// an index that points past it.
    pub fn restore(config: PaletteConfig, state: PaletteState) -> Result<Self> {
        let len = state.colors.len();
        if len == 0 || len > config.max_colors {
            return Err(Error::InvalidPaletteState(format!(
                "{len} colors outside 1..={}",
                config.max_colors
            )));
        }
        if state.current >= len {
            return Err(Error::InvalidPaletteState(format!(
                "current index {} out of range (len {len})",
                state.current
            )));
        }
        if let Some(&bad) = state.selected.iter().find(|&&i| i >= len) {
            return Err(Error::InvalidPaletteState(format!(
                "selected index {bad} out of range (len {len})"
            )));
        }

        let mut selected: BTreeSet<usize> = state.selected.into_iter().collect();
        if selected.insert(state.current) {
            log::debug!("restored palette selection lacked current entry {}", state.current);
        }
        if !state.in_mix_mode && selected.len() > 1 {
            selected = BTreeSet::from([state.current]);
        }

        Ok(Self {
            config,
            colors: state.colors,
            selected,
            current: state.current,
            in_mix_mode: state.in_mix_mode,
        })
    }

    pub fn state(&self) -> PaletteState {
        PaletteState {
            colors: self.colors.clone(),
            selected: self.selected.iter().copied().collect(),
            current: self.current,
            in_mix_mode: self.in_mix_mode,
        }
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn current_color(&self) -> Rgb {
        self.colors[self.current]
    }

    /// Recolors the current entry (the primary dials edit it in place).
    #[inline]
    pub fn set_current_color(&mut self, color: Rgb) {
        self.colors[self.current] = color;
    }

    /// Selected indices, ascending.
    #[inline]
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    #[inline]
    pub fn in_mix_mode(&self) -> bool {
        self.in_mix_mode
    }

    /// Subtractive mix of every selected entry.
    pub fn selection_mix(&self) -> Result<Rgb> {
        let colors: Vec<Rgb> = self.selected.iter().map(|&i| self.colors[i]).collect();
        mix_colors(&colors)
    }

    /// Appends a paint and makes it the current, sole selection.
    ///
    /// # Errors
    /// [`Error::PaletteFull`] at `max_colors`.
    pub fn add_color(&mut self, color: Rgb) -> Result<usize> {
        if self.colors.len() >= self.config.max_colors {
            return Err(Error::PaletteFull { max: self.config.max_colors });
        }
        self.colors.push(color);
        let index = self.colors.len() - 1;
        self.current = index;
        self.selected = BTreeSet::from([index]);
        log::debug!("palette entry {index} added ({color})");
        Ok(index)
    }

    /// Removes a paint.
    ///
    /// Refused while mixing, for the current entry, and at `min_colors`.
    pub fn remove_color(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let reason = if self.in_mix_mode {
            Some("palette is in mix mode")
        } else if index == self.current {
            Some("entry is the current color")
        } else if self.colors.len() <= self.config.min_colors {
            Some("palette is at its minimum size")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(Error::RemoveRefused { index, reason });
        }

        self.colors.remove(index);
        let shift = |i: usize| if i > index { i - 1 } else { i };
        self.current = shift(self.current);
        self.selected = self
            .selected
            .iter()
            .filter(|&&i| i != index)
            .map(|&i| shift(i))
            .collect();
        log::debug!("palette entry {index} removed");
        Ok(())
    }

    /// A tap on entry `index`. Returns the color the brush should now use.
    ///
    /// Outside mix mode the entry becomes current and the only selection.
    /// In mix mode the entry's selection toggles (the current entry stays
    /// selected) and the mix of the selection is returned.
    pub fn tap(&mut self, index: usize) -> Result<Rgb> {
        self.check_index(index)?;

        if !self.in_mix_mode {
            self.current = index;
            self.selected = BTreeSet::from([index]);
            return Ok(self.current_color());
        }

        if index != self.current && !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        self.selection_mix()
    }

    /// Enters or leaves mix mode. Returns the color the brush should now use.
    ///
    /// Leaving with more than one entry selected stores the mix as a new
    /// current entry, or recolors the current entry when the palette is full,
    /// and collapses the selection to it.
    pub fn set_mix_mode(&mut self, on: bool) -> Result<Rgb> {
        if on {
            self.in_mix_mode = true;
            return self.selection_mix();
        }

        if self.in_mix_mode && self.selected.len() > 1 {
            let mixed = self.selection_mix()?;
            match self.add_color(mixed) {
                Ok(_) => {}
                Err(Error::PaletteFull { .. }) => {
                    log::debug!("palette full; mix replaces entry {}", self.current);
                    self.set_current_color(mixed);
                    self.selected = BTreeSet::from([self.current]);
                }
                Err(e) => return Err(e),
            }
        }
        self.in_mix_mode = false;
        Ok(self.current_color())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.colors.len() {
            return Err(Error::IndexOutOfRange { index, len: self.colors.len() });
        }
        Ok(())
    }
}
