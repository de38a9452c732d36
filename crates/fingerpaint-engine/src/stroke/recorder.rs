use crate::coords::{NormalizedPoint, Viewport};
use crate::error::{Error, Result};
use crate::paint::Rgb;

use super::{PathGeometry, Stroke};

/// Recorder configuration.
///
/// `threshold_px` is the anti-jitter filter: a move is kept only when it
/// travels further than this many pixels along at least one axis. It is
/// converted per axis with the current surface size so it behaves the same
/// across pixel densities.
///
/// `paint_radius` is the brush radius in pixels (dot radius, half the line width).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RecorderConfig {
    pub threshold_px: f32,
    pub paint_radius: f32,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            threshold_px: 3.0,
            paint_radius: 10.0,
        }
    }
}

/// A stroke together with the geometry built for it while recording.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedStroke {
    pub stroke: Stroke,
    pub geometry: PathGeometry,
}

impl FinishedStroke {
    /// Pairs a persisted stroke with freshly rebuilt geometry.
    pub fn rebuilt(stroke: Stroke) -> Self {
        let geometry = super::rebuild_geometry(&stroke);
        Self { stroke, geometry }
    }
}

/// Records one gesture at a time.
///
/// State machine:
/// - idle: `start_stroke` begins recording with a single point
/// - recording: `extend_stroke` appends points past the movement threshold,
///   `end_stroke` hands the finished stroke back and returns to idle
///
/// `extend_stroke` / `end_stroke` while idle are contract violations and
/// return [`Error::NoActiveStroke`] without touching any state.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    config: RecorderConfig,
    active: Option<FinishedStroke>,
}

impl StrokeRecorder {
    pub fn new(config: RecorderConfig) -> Self {
        Self { config, active: None }
    }

    #[inline]
    pub fn config(&self) -> RecorderConfig {
        self.config
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// In-progress stroke and its geometry, if a gesture is live.
    #[inline]
    pub fn active(&self) -> Option<&FinishedStroke> {
        self.active.as_ref()
    }

    /// Begins a gesture at `point`.
    ///
    /// A gesture still in progress (the host lost its up event) is discarded.
    pub fn start_stroke(&mut self, point: NormalizedPoint, color: Rgb) {
        if let Some(dropped) = self.active.take() {
            log::warn!(
                "start_stroke while recording; discarding unfinished stroke of {} points",
                dropped.stroke.len()
            );
        }

        self.active = Some(FinishedStroke {
            stroke: Stroke::new(point, color),
            geometry: PathGeometry::new(point),
        });
        log::debug!("stroke started at ({:.4}, {:.4}) color {}", point.x, point.y, color);
    }

    /// Offers a move sample. Returns whether it was kept.
    ///
    /// # Errors
    /// [`Error::NoActiveStroke`] when no gesture is live.
    pub fn extend_stroke(&mut self, point: NormalizedPoint, viewport: Viewport) -> Result<bool> {
        let threshold_px = self.config.threshold_px;
        let Some(active) = self.active.as_mut() else {
            log::warn!("extend_stroke without an active stroke");
            return Err(Error::NoActiveStroke);
        };

        if !viewport.is_valid() {
            log::debug!("extend_stroke on invalid viewport {viewport:?}; sample ignored");
            return Ok(false);
        }
        if !point.is_finite() {
            log::debug!("extend_stroke with non-finite sample ({}, {}); ignored", point.x, point.y);
            return Ok(false);
        }

        let last = active.stroke.last_point();
        let dx = (point.x - last.x).abs();
        let dy = (point.y - last.y).abs();
        if dx <= threshold_px / viewport.width && dy <= threshold_px / viewport.height {
            return Ok(false);
        }

        active.geometry.extend(last, point);
        active.stroke.push_point(point);
        Ok(true)
    }

    /// Ends the gesture and returns the finished stroke.
    ///
    /// # Errors
    /// [`Error::NoActiveStroke`] when no gesture is live.
    pub fn end_stroke(&mut self) -> Result<FinishedStroke> {
        let finished = self.active.take().ok_or_else(|| {
            log::warn!("end_stroke without an active stroke");
            Error::NoActiveStroke
        })?;
        log::debug!(
            "stroke finished: {} points, {} segments",
            finished.stroke.len(),
            finished.geometry.segment_count()
        );
        Ok(finished)
    }

    /// Drops the live gesture, if any, without producing a stroke.
    pub fn cancel_stroke(&mut self) -> Option<Stroke> {
        self.active.take().map(|f| f.stroke)
    }
}
