use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paint::{Cmy, Rgb};
use crate::palette::{ColorPicker, Palette, PaletteConfig, PaletteState};
use crate::stroke::Stroke;
use crate::surface::PaintSurface;

/// Everything needed to bring a painting session back after the host tears it down.
///
/// Only source data is stored: stroke point lists, never their geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub strokes: Vec<Stroke>,
    pub paint_color: Rgb,
    pub palette: PaletteState,
    pub cmy: Cmy,
}

impl SessionSnapshot {
    pub fn capture(surface: &PaintSurface, picker: &ColorPicker) -> Self {
        Self {
            strokes: surface.snapshot_strokes(),
            paint_color: surface.paint_color(),
            palette: picker.palette().state(),
            cmy: picker.cmy(),
        }
    }

    /// Restores strokes and paint color onto `surface` and returns the rebuilt picker.
    ///
    /// # Errors
    /// [`Error::InvalidPaletteState`](crate::Error::InvalidPaletteState) if the
    /// saved palette does not fit `palette_config`. The surface is left untouched then.
    pub fn apply(self, surface: &mut PaintSurface, palette_config: PaletteConfig) -> Result<ColorPicker> {
        let palette = Palette::restore(palette_config, self.palette)?;
        surface.restore_strokes(self.strokes);
        surface.set_paint_color(self.paint_color);
        Ok(ColorPicker::restore(palette, self.cmy))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use crate::error::Error;
    use crate::input::PointerEvent;
    use crate::stroke::RecorderConfig;

    fn painted() -> (PaintSurface, ColorPicker) {
        let palette = Palette::with_colors(PaletteConfig::default(), [Rgb::RED, Rgb::CYAN, Rgb::YELLOW]).unwrap();
        let mut picker = ColorPicker::new(palette);
        let mut surface = PaintSurface::new(Viewport::new(300.0, 300.0), RecorderConfig::default());

        surface.set_paint_color(picker.tap(0).unwrap());
        surface.handle_pointer(PointerEvent::down(15.0, 30.0)).unwrap();
        surface.handle_pointer(PointerEvent::up(15.0, 30.0)).unwrap();

        surface.set_paint_color(picker.tap(1).unwrap());
        surface.handle_pointer(PointerEvent::down(30.0, 30.0)).unwrap();
        surface.handle_pointer(PointerEvent::moved(75.0, 120.0)).unwrap();
        surface.handle_pointer(PointerEvent::moved(150.0, 135.0)).unwrap();
        surface.handle_pointer(PointerEvent::moved(240.0, 60.0)).unwrap();
        surface.handle_pointer(PointerEvent::up(240.0, 60.0)).unwrap();

        (surface, picker)
    }

    #[test]
    fn json_round_trip_rebuilds_identical_drawing() {
        let (surface, picker) = painted();
        let json = SessionSnapshot::capture(&surface, &picker).to_json().unwrap();

        let snapshot = SessionSnapshot::from_json(&json).unwrap();
        let mut restored = PaintSurface::new(Viewport::new(300.0, 300.0), RecorderConfig::default());
        let restored_picker = snapshot.apply(&mut restored, PaletteConfig::default()).unwrap();

        assert_eq!(restored.draw_list(), surface.draw_list());
        assert_eq!(restored.paint_color(), surface.paint_color());
        assert_eq!(restored_picker.palette().state(), picker.palette().state());
        assert_eq!(restored_picker.paint_color(), picker.paint_color());
        for (a, b) in restored.completed().iter().zip(surface.completed().iter()) {
            assert_eq!(a.geometry, b.geometry);
        }
    }

    #[test]
    fn geometry_is_not_persisted() {
        let (surface, picker) = painted();
        let value = serde_json::to_value(SessionSnapshot::capture(&surface, &picker)).unwrap();
        let stroke = &value["strokes"][1];
        let mut keys: Vec<_> = stroke.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["color", "points"]);
    }

    #[test]
    fn malformed_json_is_a_snapshot_error() {
        assert!(matches!(SessionSnapshot::from_json("{ nope"), Err(Error::Snapshot(_))));
    }

    #[test]
    fn invalid_palette_leaves_surface_untouched() {
        let (surface, picker) = painted();
        let mut snapshot = SessionSnapshot::capture(&surface, &picker);
        snapshot.palette.current = 99;

        let mut target = PaintSurface::new(Viewport::new(300.0, 300.0), RecorderConfig::default());
        assert!(snapshot.apply(&mut target, PaletteConfig::default()).is_err());
        assert!(target.completed().is_empty());
    }
}
