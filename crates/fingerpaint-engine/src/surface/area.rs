use crate::coords::{NormalizedPoint, Viewport};
use crate::error::Result;
use crate::input::{PointerEvent, PointerPhase};
use crate::paint::Rgb;
use crate::scene::DrawList;
use crate::stroke::{CompletedStrokeLog, RecorderConfig, Stroke, StrokeRecorder};

/// One paint area.
///
/// Owns the live recorder and the finished-stroke log exclusively; it must be
/// driven from the single thread that delivers its input and draw callbacks.
#[derive(Debug)]
pub struct PaintSurface {
    viewport: Viewport,
    recorder: StrokeRecorder,
    completed: CompletedStrokeLog,
    paint_color: Rgb,
}

impl PaintSurface {
    pub fn new(viewport: Viewport, config: RecorderConfig) -> Self {
        Self {
            viewport,
            recorder: StrokeRecorder::new(config),
            completed: CompletedStrokeLog::new(),
            paint_color: Rgb::BLACK,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the surface size. Strokes are normalized, so nothing is rebuilt;
    /// the next [`draw_list`](Self::draw_list) simply scales to the new size.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("surface resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    #[inline]
    pub fn paint_color(&self) -> Rgb {
        self.paint_color
    }

    /// Color for strokes started from now on; a live stroke keeps its color.
    #[inline]
    pub fn set_paint_color(&mut self, color: Rgb) {
        self.paint_color = color;
    }

    #[inline]
    pub fn recorder(&self) -> &StrokeRecorder {
        &self.recorder
    }

    #[inline]
    pub fn completed(&self) -> &CompletedStrokeLog {
        &self.completed
    }

    /// Routes one pointer sample to the recorder.
    ///
    /// Down and move samples arriving while the surface has no valid size are
    /// ignored. Up and cancel carry no position and are always honoured, so a
    /// gesture never outlives its pointer.
    ///
    /// # Errors
    /// [`Error::NoActiveStroke`](crate::Error::NoActiveStroke) for a move or
    /// up with no preceding down.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
        match event.phase {
            PointerPhase::Up => {
                let finished = self.recorder.end_stroke()?;
                self.completed.push(finished);
                return Ok(());
            }
            PointerPhase::Cancel => {
                if let Some(dropped) = self.recorder.cancel_stroke() {
                    log::debug!("gesture cancelled; dropped {} points", dropped.len());
                }
                return Ok(());
            }
            PointerPhase::Down | PointerPhase::Move => {}
        }

        if !self.viewport.is_valid() {
            log::debug!("pointer {:?} ignored: surface has no size", event.phase);
            return Ok(());
        }
        if !(event.x.is_finite() && event.y.is_finite()) {
            log::warn!("pointer {:?} ignored: non-finite position", event.phase);
            return Ok(());
        }

        let point = NormalizedPoint::from_pixels(event.x, event.y, self.viewport);
        if event.phase == PointerPhase::Down {
            self.recorder.start_stroke(point, self.paint_color);
        } else {
            self.recorder.extend_stroke(point, self.viewport)?;
        }
        Ok(())
    }

    /// Removes every finished stroke.
    pub fn clear(&mut self) {
        self.completed.clear();
    }

    /// Draw commands for the current frame: finished strokes in order, then the live one.
    pub fn draw_list(&self) -> DrawList {
        let mut list = DrawList::new();
        let config = self.recorder.config();
        for finished in self.completed.iter() {
            list.push_stroke(finished, self.viewport, config);
        }
        if let Some(active) = self.recorder.active() {
            list.push_stroke(active, self.viewport, config);
        }
        list
    }

    #[inline]
    pub fn snapshot_strokes(&self) -> Vec<Stroke> {
        self.completed.snapshot()
    }

    #[inline]
    pub fn restore_strokes(&mut self, strokes: Vec<Stroke>) {
        self.completed.restore(strokes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::error::Error;
    use crate::scene::DrawCmd;

    fn surface() -> PaintSurface {
        PaintSurface::new(Viewport::new(300.0, 300.0), RecorderConfig::default())
    }

    #[test]
    fn tap_becomes_a_dot() {
        let mut s = surface();
        s.set_paint_color(Rgb::RED);
        s.handle_pointer(PointerEvent::down(150.0, 150.0)).unwrap();
        s.handle_pointer(PointerEvent::up(150.0, 150.0)).unwrap();

        assert_eq!(s.completed().len(), 1);
        let list = s.draw_list();
        let DrawCmd::Circle(c) = &list.items()[0] else {
            panic!("expected a dot");
        };
        assert_eq!(c.center, Vec2::new(150.0, 150.0));
        assert_eq!(c.style.color, Rgb::RED);
    }

    #[test]
    fn drag_becomes_a_path_and_live_stroke_is_drawn_last() {
        let mut s = surface();
        s.handle_pointer(PointerEvent::down(30.0, 30.0)).unwrap();
        s.handle_pointer(PointerEvent::moved(90.0, 60.0)).unwrap();
        s.handle_pointer(PointerEvent::up(90.0, 60.0)).unwrap();

        s.set_paint_color(Rgb::BLUE);
        s.handle_pointer(PointerEvent::down(200.0, 200.0)).unwrap();

        let list = s.draw_list();
        assert_eq!(list.len(), 2);
        assert!(matches!(list.items()[0], DrawCmd::Path(_)));
        let DrawCmd::Circle(live) = &list.items()[1] else {
            panic!("expected live dot");
        };
        assert_eq!(live.style.color, Rgb::BLUE);
    }

    #[test]
    fn move_without_down_is_reported() {
        let mut s = surface();
        let err = s.handle_pointer(PointerEvent::moved(10.0, 10.0));
        assert!(matches!(err, Err(Error::NoActiveStroke)));
        assert!(s.completed().is_empty());
    }

    #[test]
    fn cancel_keeps_nothing() {
        let mut s = surface();
        s.handle_pointer(PointerEvent::down(10.0, 10.0)).unwrap();
        s.handle_pointer(PointerEvent::new(PointerPhase::Cancel, 10.0, 10.0)).unwrap();
        assert!(s.completed().is_empty());
        assert!(!s.recorder().is_recording());
    }

    #[test]
    fn zero_sized_surface_ignores_input() {
        let mut s = PaintSurface::new(Viewport::new(0.0, 0.0), RecorderConfig::default());
        s.handle_pointer(PointerEvent::down(10.0, 10.0)).unwrap();
        assert!(!s.recorder().is_recording());
    }

    #[test]
    fn resize_rescales_existing_strokes() {
        let mut s = surface();
        s.handle_pointer(PointerEvent::down(150.0, 75.0)).unwrap();
        s.handle_pointer(PointerEvent::up(150.0, 75.0)).unwrap();
        s.resize(Viewport::new(600.0, 600.0));

        let list = s.draw_list();
        let DrawCmd::Circle(c) = &list.items()[0] else {
            panic!("expected a dot");
        };
        assert_eq!(c.center, Vec2::new(300.0, 150.0));
    }

    #[test]
    fn up_after_collapse_still_finishes_the_stroke() {
        let mut s = surface();
        s.handle_pointer(PointerEvent::down(30.0, 30.0)).unwrap();
        s.handle_pointer(PointerEvent::moved(120.0, 90.0)).unwrap();
        s.resize(Viewport::new(0.0, 0.0));
        s.handle_pointer(PointerEvent::up(120.0, 90.0)).unwrap();

        assert!(!s.recorder().is_recording());
        assert_eq!(s.completed().len(), 1);

        s.resize(Viewport::new(300.0, 300.0));
        s.handle_pointer(PointerEvent::down(10.0, 10.0)).unwrap();
        s.handle_pointer(PointerEvent::up(10.0, 10.0)).unwrap();
        assert_eq!(s.completed().len(), 2);
    }

    #[test]
    fn cancel_after_collapse_drops_the_stroke() {
        let mut s = surface();
        s.handle_pointer(PointerEvent::down(30.0, 30.0)).unwrap();
        s.resize(Viewport::new(0.0, 0.0));
        s.handle_pointer(PointerEvent::new(PointerPhase::Cancel, 0.0, 0.0)).unwrap();
        assert!(!s.recorder().is_recording());
        assert!(s.completed().is_empty());
    }

    #[test]
    fn non_finite_move_is_ignored() {
        let mut s = surface();
        s.handle_pointer(PointerEvent::down(30.0, 30.0)).unwrap();
        s.handle_pointer(PointerEvent::moved(f32::NAN, 90.0)).unwrap();
        s.handle_pointer(PointerEvent::up(30.0, 30.0)).unwrap();
        assert_eq!(s.completed().snapshot()[0].len(), 1);
    }

    #[test]
    fn clear_then_restore() {
        let mut s = surface();
        s.handle_pointer(PointerEvent::down(30.0, 30.0)).unwrap();
        s.handle_pointer(PointerEvent::moved(120.0, 60.0)).unwrap();
        s.handle_pointer(PointerEvent::up(120.0, 60.0)).unwrap();
        let saved = s.snapshot_strokes();
        let before = s.draw_list();

        s.clear();
        assert!(s.draw_list().is_empty());

        s.restore_strokes(saved);
        assert_eq!(s.draw_list(), before);
    }
}
